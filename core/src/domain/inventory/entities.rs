use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::nutrition::NutrientInfo;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Creation time in unix milliseconds, unique within the inventory.
    pub id: i64,
    pub name: String,
    /// RFC 3339 timestamp.
    pub date_added: String,
    pub nutrients: NutrientInfo,
}

impl InventoryItem {
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }

    pub fn suits_diet(&self, diet: &str) -> bool {
        self.nutrients
            .dietary_suitability
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(diet))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("Inventory storage I/O failed: {0}")]
    Io(String),

    #[error("Inventory data is corrupt: {0}")]
    Serialization(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(InventoryItem),
    AlreadyPresent,
}

pub const ALL_DIETS: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryFilter {
    pub search: Option<String>,
    pub diet: Option<String>,
}

impl InventoryFilter {
    pub fn matches(&self, item: &InventoryItem) -> bool {
        let name_matches = self
            .search
            .as_deref()
            .map(|term| item.name.to_lowercase().contains(&term.trim().to_lowercase()))
            .unwrap_or(true);

        let diet_matches = match self.diet.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(diet) if diet.eq_ignore_ascii_case(ALL_DIETS) => true,
            Some(diet) => item.suits_diet(diet),
        };

        name_matches && diet_matches
    }
}
