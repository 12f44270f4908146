use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::{CatalogConfig, entities::app_errors::CoreError},
    food_catalog::{entities::CatalogFood, ports::FoodCatalogSource},
};

pub const MIN_PRODUCTS: u64 = 100;
pub const MAX_CATEGORIES: usize = 300;

#[derive(Debug, Deserialize)]
struct CategoriesResponse {
    #[serde(default)]
    tags: Vec<CategoryTag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryTag {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub products: u64,
}

/// Popular, named categories only, capped at [`MAX_CATEGORIES`].
pub fn select_categories(tags: Vec<CategoryTag>) -> Vec<CatalogFood> {
    tags.into_iter()
        .filter(|tag| tag.products > MIN_PRODUCTS)
        .filter_map(|tag| {
            let name = tag.name.filter(|name| !name.trim().is_empty())?;
            Some(CatalogFood {
                id: tag.id,
                name: name.to_lowercase(),
                category: Some(name),
            })
        })
        .take(MAX_CATEGORIES)
        .collect()
}

#[derive(Debug, Clone)]
pub struct OpenFoodFactsSource {
    categories_url: String,
    client: Client,
}

impl OpenFoodFactsSource {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            categories_url: config.categories_url.clone(),
            client: Client::new(),
        }
    }
}

impl FoodCatalogSource for OpenFoodFactsSource {
    async fn fetch_foods(&self) -> Result<Vec<CatalogFood>, CoreError> {
        let response = self
            .client
            .get(&self.categories_url)
            .send()
            .await
            .map_err(|e| CoreError::ExternalServiceError(format!("Food catalogue error: {e}")))?;

        if !response.status().is_success() {
            return Err(CoreError::ExternalServiceError(format!(
                "Failed to fetch food categories: {}",
                response.status()
            )));
        }

        let body: CategoriesResponse = response.json().await.map_err(|e| {
            CoreError::ExternalServiceError(format!("Invalid food catalogue response: {e}"))
        })?;

        Ok(select_categories(body.tags))
    }
}
