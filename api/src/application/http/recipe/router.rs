use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::suggest_recipe::{__path_suggest_recipe, suggest_recipe};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(suggest_recipe))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/recipes", state.args.server.root_path),
        post(suggest_recipe),
    )
}
