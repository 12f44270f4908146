use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food_detection::entities::{DetectionError, FoodItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DetectionSource {
    Remote,
    Model,
    Heuristic,
}

/// One or more detected foods; `primary_food` is always `foods[0]`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodDetectionResult {
    foods: Vec<FoodItem>,
    primary_food: FoodItem,
    source: DetectionSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    confidence: Option<f64>,
}

impl FoodDetectionResult {
    /// Fails with [`DetectionError::NoFoodsDetected`] on an empty list.
    pub fn new(foods: Vec<FoodItem>, source: DetectionSource) -> Result<Self, DetectionError> {
        let primary_food = foods
            .first()
            .cloned()
            .ok_or(DetectionError::NoFoodsDetected)?;

        Ok(Self {
            foods,
            primary_food,
            source,
            confidence: None,
        })
    }

    /// Wraps a single local label; nutrition is unknown so every nutrient is zero.
    pub fn from_label(name: &str, confidence: f64, source: DetectionSource) -> Self {
        let item = FoodItem::unknown_nutrition(name);

        Self {
            foods: vec![item.clone()],
            primary_food: item,
            source,
            confidence: Some(confidence),
        }
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn primary_food(&self) -> &FoodItem {
        &self.primary_food
    }

    pub fn source(&self) -> DetectionSource {
        self.source
    }

    pub fn confidence(&self) -> Option<f64> {
        self.confidence
    }

    pub fn into_foods(self) -> Vec<FoodItem> {
        self.foods
    }
}
