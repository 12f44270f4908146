use axum::extract::{Query, State};
use nutrilens_core::domain::food_catalog::entities::CatalogFood;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::{
    nutrition::validators::SearchFoodsQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, PartialEq, ToSchema)]
pub struct SearchFoodsResponse {
    pub data: Vec<CatalogFood>,
}

#[utoipa::path(
    get,
    path = "/search",
    tag = "nutrition",
    summary = "Search the food catalogue",
    params(SearchFoodsQuery),
    responses(
        (status = 200, body = SearchFoodsResponse)
    ),
)]
pub async fn search_foods(
    State(state): State<AppState>,
    Query(query): Query<SearchFoodsQuery>,
) -> Result<Response<SearchFoodsResponse>, ApiError> {
    let data = state.service.catalog.search(&query.q).await;

    Ok(Response::OK(SearchFoodsResponse { data }))
}
