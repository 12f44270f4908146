use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food_detection::entities::FoodItem;

/// Nutrients for a typical serving.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutrientInfo {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default)]
    pub fiber: f64,
    #[serde(default)]
    pub sugar: f64,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub dietary_suitability: Vec<String>,
}

impl NutrientInfo {
    /// Every amount is finite and non-negative.
    pub fn has_valid_amounts(&self) -> bool {
        [
            self.calories,
            self.protein,
            self.carbs,
            self.fat,
            self.fiber,
            self.sugar,
        ]
        .iter()
        .all(|amount| amount.is_finite() && *amount >= 0.0)
    }
}

impl From<&FoodItem> for NutrientInfo {
    fn from(food: &FoodItem) -> Self {
        Self {
            calories: food.calories,
            protein: food.protein,
            carbs: food.carbs,
            fat: food.fat,
            fiber: food.fiber.unwrap_or_default(),
            sugar: food.sugar.unwrap_or_default(),
            benefits: food.benefits.clone().unwrap_or_default(),
            dietary_suitability: food.dietary_suitability.clone().unwrap_or_default(),
        }
    }
}
