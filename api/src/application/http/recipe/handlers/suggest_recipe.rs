use axum::extract::State;
use nutrilens_core::domain::recipe::entities::{PerServing, Recipe};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::SuggestRecipeValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRecipeResponse {
    pub data: Recipe,
    pub per_serving: PerServing,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Suggest a recipe",
    description = "Returns the first recipe matching the given ingredients.",
    request_body = SuggestRecipeValidator,
    responses(
        (status = 200, body = SuggestRecipeResponse),
        (status = 404, description = "No recipe uses these ingredients"),
        (status = 503, description = "Recipe search is not configured"),
    ),
)]
pub async fn suggest_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SuggestRecipeValidator>,
) -> Result<Response<SuggestRecipeResponse>, ApiError> {
    let recipes = state
        .service
        .recipes
        .as_ref()
        .ok_or_else(|| ApiError::ServiceUnavailable("Recipe search is not configured".to_string()))?;

    let recipe = recipes.suggest(&payload.ingredients).await?;
    let per_serving = recipe.per_serving();

    Ok(Response::OK(SuggestRecipeResponse {
        data: recipe,
        per_serving,
    }))
}
