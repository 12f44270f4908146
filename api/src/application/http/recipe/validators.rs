use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SuggestRecipeValidator {
    /// Comma separated ingredient names.
    #[validate(length(min = 1, message = "ingredients are required"))]
    #[schema(example = "chicken, rice, broccoli")]
    pub ingredients: String,
}
