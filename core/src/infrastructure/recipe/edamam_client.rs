use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::{RecipeConfig, entities::app_errors::CoreError},
    recipe::{entities::Recipe, ports::RecipeClient},
};

#[derive(Debug, Clone)]
pub struct EdamamRecipeClient {
    base_url: String,
    app_id: String,
    app_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    recipe: Recipe,
}

impl EdamamRecipeClient {
    pub fn new(config: &RecipeConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            app_id: config.app_id.clone(),
            app_key: config.app_key.clone(),
            client: Client::new(),
        }
    }
}

impl RecipeClient for EdamamRecipeClient {
    async fn search(&self, query: String) -> Result<Option<Recipe>, CoreError> {
        let url = format!("{}/api/recipes/v2", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("type", "public"),
                ("q", query.as_str()),
                ("app_id", self.app_id.as_str()),
                ("app_key", self.app_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Recipe API request failed");
                CoreError::ExternalServiceError(format!("Recipe API error: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(%status, "Recipe API returned error");
            return Err(CoreError::ExternalServiceError(format!(
                "Failed to fetch recipes: {status}"
            )));
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse recipe response");
            CoreError::ExternalServiceError(format!("Failed to parse recipe response: {e}"))
        })?;

        Ok(body.hits.into_iter().next().map(|hit| hit.recipe))
    }
}
