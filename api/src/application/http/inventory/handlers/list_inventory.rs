use axum::extract::{Query, State};
use nutrilens_core::domain::inventory::entities::{InventoryFilter, InventoryItem};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::{
    inventory::validators::InventoryQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, PartialEq, ToSchema)]
pub struct ListInventoryResponse {
    pub data: Vec<InventoryItem>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "inventory",
    summary = "List inventory",
    params(InventoryQuery),
    responses(
        (status = 200, body = ListInventoryResponse)
    ),
)]
pub async fn list_inventory(
    State(state): State<AppState>,
    Query(query): Query<InventoryQuery>,
) -> Result<Response<ListInventoryResponse>, ApiError> {
    let filter = InventoryFilter {
        search: query.search,
        diet: query.diet,
    };
    let data = state.service.inventory.filter(&filter).await;

    Ok(Response::OK(ListInventoryResponse { data }))
}
