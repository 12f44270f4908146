use axum::extract::State;
use nutrilens_core::domain::chat::entities::ChatMessage;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::{
    chat::validators::SendMessageValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, PartialEq, ToSchema)]
pub struct SendMessageResponse {
    /// The conversation including the new question and its answer.
    pub data: Vec<ChatMessage>,
}

#[utoipa::path(
    post,
    path = "",
    tag = "chat",
    summary = "Ask the nutrition assistant",
    request_body = SendMessageValidator,
    responses(
        (status = 200, body = SendMessageResponse),
        (status = 502, description = "The chat API failed"),
        (status = 503, description = "Chat is not configured"),
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SendMessageValidator>,
) -> Result<Response<SendMessageResponse>, ApiError> {
    let chat = state
        .service
        .chat
        .as_ref()
        .ok_or_else(|| ApiError::ServiceUnavailable("Chat is not configured".to_string()))?;

    let data = chat.send(payload.history, &payload.message).await?;

    Ok(Response::OK(SendMessageResponse { data }))
}
