use axum::extract::State;
use nutrilens_core::domain::food_detection::entities::FoodDetectionResult;

use crate::application::http::{
    inventory::{
        handlers::add_inventory_item::AddInventoryItemResponse,
        validators::AddDetectionValidator,
    },
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/detection",
    tag = "inventory",
    summary = "Add a detected food to the inventory",
    description = "Stores the primary food of a detection. Remote results keep their nutrition, local labels use the nutrient table.",
    request_body = AddDetectionValidator,
    responses(
        (status = 200, body = AddInventoryItemResponse),
        (status = 400, description = "Blank name or negative amounts"),
    ),
)]
pub async fn add_detection_to_inventory(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AddDetectionValidator>,
) -> Result<Response<AddInventoryItemResponse>, ApiError> {
    let detection = FoodDetectionResult::new(vec![payload.primary_food], payload.source)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let outcome = state.service.inventory.add_detection(&detection).await?;

    Ok(Response::OK(AddInventoryItemResponse::from(outcome)))
}
