use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_suitability: Option<Vec<String>>,
}

impl FoodItem {
    /// A named item whose nutrition is unknown: every nutrient is zero.
    pub fn unknown_nutrition(name: impl Into<String>) -> Self {
        Self {
            name: normalize_food_name(&name.into()),
            quantity: None,
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            fiber: Some(0.0),
            sugar: Some(0.0),
            benefits: Some(Vec::new()),
            dietary_suitability: Some(Vec::new()),
        }
    }
}

/// Canonical food identifier: trimmed and lowercase.
pub fn normalize_food_name(name: &str) -> String {
    name.trim().to_lowercase()
}
