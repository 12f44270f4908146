use axum::extract::{Path, State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, PartialEq, ToSchema)]
pub struct RemoveInventoryItemResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "inventory",
    summary = "Remove a food from the inventory",
    params(
        ("id" = i64, Path, description = "Inventory item id"),
    ),
    responses(
        (status = 200, body = RemoveInventoryItemResponse),
        (status = 404, description = "No item with this id"),
    ),
)]
pub async fn remove_inventory_item(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<RemoveInventoryItemResponse>, ApiError> {
    if !state.service.inventory.remove(id).await? {
        return Err(ApiError::NotFound(format!("Inventory item {id} not found")));
    }

    Ok(Response::OK(RemoveInventoryItemResponse {
        message: "Item removed from inventory".to_string(),
    }))
}
