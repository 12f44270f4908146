use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_nutrients::{__path_get_nutrients, get_nutrients},
    search_foods::{__path_search_foods, search_foods},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_nutrients))]
pub struct NutrientsApiDoc;

#[derive(OpenApi)]
#[openapi(paths(search_foods))]
pub struct FoodsApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/nutrients/{{name}}"), get(get_nutrients))
        .route(&format!("{root_path}/foods/search"), get(search_foods))
}
