use axum::extract::Path;
use nutrilens_core::domain::nutrition::{NutrientInfo, get_nutrient_data, is_known_food};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[derive(Debug, Serialize, PartialEq, ToSchema)]
pub struct GetNutrientsResponse {
    pub name: String,
    /// `false` when `data` holds the generic default entry.
    pub known: bool,
    pub data: NutrientInfo,
}

#[utoipa::path(
    get,
    path = "/{name}",
    tag = "nutrition",
    summary = "Nutrient values per 100 g",
    params(
        ("name" = String, Path, description = "Food name"),
    ),
    responses(
        (status = 200, body = GetNutrientsResponse)
    ),
)]
pub async fn get_nutrients(
    Path(name): Path<String>,
) -> Result<Response<GetNutrientsResponse>, ApiError> {
    Ok(Response::OK(GetNutrientsResponse {
        known: is_known_food(&name),
        data: get_nutrient_data(&name),
        name,
    }))
}
