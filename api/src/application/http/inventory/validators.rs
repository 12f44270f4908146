use nutrilens_core::domain::{
    food_detection::entities::{DetectionSource, FoodItem},
    nutrition::NutrientInfo,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AddInventoryItemValidator {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,
    /// Looked up in the nutrient table when omitted.
    #[serde(default)]
    #[validate(nested)]
    pub nutrients: Option<NutrientsBody>,
}

/// Amounts per serving; none may be negative.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NutrientsBody {
    #[validate(range(min = 0.0, message = "calories must not be negative"))]
    pub calories: f64,
    #[validate(range(min = 0.0, message = "protein must not be negative"))]
    pub protein: f64,
    #[validate(range(min = 0.0, message = "carbs must not be negative"))]
    pub carbs: f64,
    #[validate(range(min = 0.0, message = "fat must not be negative"))]
    pub fat: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "fiber must not be negative"))]
    pub fiber: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "sugar must not be negative"))]
    pub sugar: f64,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub dietary_suitability: Vec<String>,
}

impl From<NutrientsBody> for NutrientInfo {
    fn from(body: NutrientsBody) -> Self {
        Self {
            calories: body.calories,
            protein: body.protein,
            carbs: body.carbs,
            fat: body.fat,
            fiber: body.fiber,
            sugar: body.sugar,
            benefits: body.benefits,
            dietary_suitability: body.dietary_suitability,
        }
    }
}

/// The `data` of a `/detect` response; other fields are ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddDetectionValidator {
    pub primary_food: FoodItem,
    pub source: DetectionSource,
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InventoryQuery {
    #[param(example = "apple")]
    pub search: Option<String>,
    /// Dietary tag such as `Vegan`; `all` disables the filter.
    #[param(example = "all")]
    pub diet: Option<String>,
}
