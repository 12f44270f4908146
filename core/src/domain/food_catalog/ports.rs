use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, food_catalog::entities::CatalogFood};

/// Remote list of known food names.
pub trait FoodCatalogSource: Send + Sync {
    fn fetch_foods(&self) -> impl Future<Output = Result<Vec<CatalogFood>, CoreError>> + Send;
}
