use axum::extract::{Multipart, State};
use nutrilens_core::domain::food_detection::entities::FoodDetectionResult;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, PartialEq, ToSchema)]
pub struct DetectFoodResponse {
    pub data: FoodDetectionResult,
}

#[utoipa::path(
    post,
    path = "",
    tag = "detection",
    summary = "Detect food in an image",
    description = "Identifies the foods in an uploaded image. Falls back to on-device classification when the vision API is unavailable.",
    request_body(content_type = "multipart/form-data", description = "Form with an `image` file field"),
    responses(
        (status = 200, body = DetectFoodResponse),
        (status = 400, description = "Missing, unsupported or oversized image"),
        (status = 409, description = "A detection is already running"),
    ),
)]
pub async fn detect_food(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<DetectFoodResponse>, ApiError> {
    let mut image: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        image = Some((data.to_vec(), mime_type));
    }

    let (data, mime_type) =
        image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let outcome = state
        .service
        .detect_upload(data, &mime_type, &state.shutdown.child_token())
        .await?;

    outcome
        .completed()
        .map(|result| Response::OK(DetectFoodResponse { data: result }))
        .ok_or_else(|| ApiError::ServiceUnavailable("Detection was cancelled".to_string()))
}
