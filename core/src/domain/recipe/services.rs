use tracing::instrument;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::Recipe, ports::RecipeClient},
};

/// Comma separated ingredients, trimmed with blanks dropped.
pub fn build_query(ingredients: &str) -> Result<String, CoreError> {
    let parts: Vec<&str> = ingredients
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        return Err(CoreError::Invalid);
    }
    Ok(parts.join(","))
}

pub struct RecipeService<C> {
    client: C,
}

impl<C: RecipeClient> RecipeService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn suggest(&self, ingredients: &str) -> Result<Recipe, CoreError> {
        let query = build_query(ingredients)?;

        match self.client.search(query).await? {
            Some(recipe) => {
                tracing::info!(label = %recipe.label, "Recipe found");
                Ok(recipe)
            }
            None => {
                tracing::info!("No recipes found");
                Err(CoreError::NotFound)
            }
        }
    }
}
