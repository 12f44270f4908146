use axum::extract::State;
use nutrilens_core::domain::{
    inventory::entities::{AddOutcome, InventoryItem},
    nutrition::{NutrientInfo, get_nutrient_data},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::{
    inventory::validators::AddInventoryItemValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, PartialEq, ToSchema)]
pub struct AddInventoryItemResponse {
    /// `false` when a food with the same name was already stored.
    pub added: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<InventoryItem>,
}

impl From<AddOutcome> for AddInventoryItemResponse {
    fn from(outcome: AddOutcome) -> Self {
        match outcome {
            AddOutcome::Added(item) => Self {
                added: true,
                data: Some(item),
            },
            AddOutcome::AlreadyPresent => Self {
                added: false,
                data: None,
            },
        }
    }
}

#[utoipa::path(
    post,
    path = "",
    tag = "inventory",
    summary = "Add a food to the inventory",
    request_body = AddInventoryItemValidator,
    responses(
        (status = 200, body = AddInventoryItemResponse),
        (status = 400, description = "Blank name or negative amounts"),
    ),
)]
pub async fn add_inventory_item(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AddInventoryItemValidator>,
) -> Result<Response<AddInventoryItemResponse>, ApiError> {
    let nutrients = payload
        .nutrients
        .map(NutrientInfo::from)
        .unwrap_or_else(|| get_nutrient_data(&payload.name));

    let outcome = state
        .service
        .inventory
        .add(&payload.name, nutrients)
        .await?;

    Ok(Response::OK(AddInventoryItemResponse::from(outcome)))
}
