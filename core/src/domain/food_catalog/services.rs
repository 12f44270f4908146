use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::food_catalog::{
    entities::{CatalogFood, fallback_foods},
    ports::FoodCatalogSource,
};

pub const MIN_SEARCH_LEN: usize = 2;
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Lazily populated catalogue. Concurrent first calls share one fetch.
pub struct FoodCatalogCache<S> {
    source: S,
    items: Mutex<Option<Arc<Vec<CatalogFood>>>>,
}

impl<S: FoodCatalogSource> FoodCatalogCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            items: Mutex::new(None),
        }
    }

    pub async fn is_populated(&self) -> bool {
        self.items.lock().await.is_some()
    }

    pub async fn items(&self) -> Arc<Vec<CatalogFood>> {
        let mut guard = self.items.lock().await;
        if let Some(items) = guard.as_ref() {
            return Arc::clone(items);
        }

        // The local list is never cached.
        let items = match self.source.fetch_foods().await {
            Ok(items) if !items.is_empty() => items,
            Ok(_) => {
                tracing::warn!("Food catalogue is empty, using local list");
                return Arc::new(fallback_foods());
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching food catalogue, using local list");
                return Arc::new(fallback_foods());
            }
        };
        tracing::debug!(count = items.len(), "Food catalogue populated");

        let items = Arc::new(items);
        *guard = Some(Arc::clone(&items));
        items
    }

    /// Case-insensitive substring search over the catalogue.
    pub async fn search(&self, term: &str) -> Vec<CatalogFood> {
        let term = term.trim().to_lowercase();
        if term.chars().count() < MIN_SEARCH_LEN {
            return Vec::new();
        }

        self.items()
            .await
            .iter()
            .filter(|food| food.name.to_lowercase().contains(&term))
            .take(MAX_SEARCH_RESULTS)
            .cloned()
            .collect()
    }

    pub async fn invalidate(&self) {
        self.items.lock().await.take();
    }
}
