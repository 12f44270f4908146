use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogFood {
    pub id: String,
    /// Lowercase display name used for search.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

const FALLBACK_NAMES: [&str; 20] = [
    "apple", "banana", "broccoli", "carrot", "salmon", "chicken", "rice", "pasta", "avocado",
    "eggs", "beef", "pork", "tofu", "spinach", "kale", "quinoa", "almond", "yogurt", "orange",
    "potato",
];

/// Local list used when the remote catalogue is unavailable.
pub fn fallback_foods() -> Vec<CatalogFood> {
    FALLBACK_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| CatalogFood {
            id: (i + 1).to_string(),
            name: name.to_string(),
            category: None,
        })
        .collect()
}
