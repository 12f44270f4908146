use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

/// Which detection tiers and integrations this instance can use.
#[derive(Debug, Serialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub remote_vision: bool,
    pub model_ready: bool,
    pub recipes: bool,
    pub chat: bool,
    pub detection_busy: bool,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Liveness and integration status",
    responses(
        (status = 200, body = HealthResponse)
    ),
)]
pub async fn get_health(
    State(state): State<AppState>,
) -> Result<Response<HealthResponse>, ApiError> {
    let service = &state.service;

    Ok(Response::OK(HealthResponse {
        status: "ok".to_string(),
        remote_vision: service.detection.has_remote(),
        model_ready: service.detection.model_ready(),
        recipes: service.recipes.is_some(),
        chat: service.chat.is_some(),
        detection_busy: service.detection_session.is_busy(),
    }))
}
