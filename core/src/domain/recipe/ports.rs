use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, recipe::entities::Recipe};

pub trait RecipeClient: Send + Sync {
    /// First recipe matching the comma-joined ingredient query, if any.
    fn search(&self, query: String) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;
}
