use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientQuantity {
    #[serde(default)]
    pub label: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub label: String,
    pub calories: f64,
    /// Number of servings.
    #[serde(rename = "yield")]
    pub servings: f64,
    #[serde(default)]
    pub ingredient_lines: Vec<String>,
    #[serde(default)]
    pub total_nutrients: HashMap<String, NutrientQuantity>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PerServing {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

impl Recipe {
    fn nutrient(&self, code: &str) -> f64 {
        self.total_nutrients
            .get(code)
            .map(|n| n.quantity)
            .unwrap_or_default()
    }

    pub fn per_serving(&self) -> PerServing {
        let servings = if self.servings > 0.0 { self.servings } else { 1.0 };
        let per = |total: f64| (total / servings).round() as i64;

        PerServing {
            calories: per(self.calories),
            protein: per(self.nutrient("PROCNT")),
            carbs: per(self.nutrient("CHOCDF")),
            fat: per(self.nutrient("FAT")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(servings: f64) -> Recipe {
        serde_json::from_value(serde_json::json!({
            "label": "Chicken Rice Bowl",
            "calories": 2150.4,
            "yield": servings,
            "ingredientLines": ["2 cups rice", "1 lb chicken"],
            "totalNutrients": {
                "PROCNT": {"label": "Protein", "quantity": 160.2, "unit": "g"},
                "CHOCDF": {"label": "Carbs", "quantity": 230.0, "unit": "g"}
            },
            "url": "https://example.com/bowl",
            "source": "Example Kitchen"
        }))
        .unwrap()
    }

    #[test]
    fn test_per_serving_divides_and_rounds() {
        let per = recipe(4.0).per_serving();
        assert_eq!(
            per,
            PerServing {
                calories: 538,
                protein: 40,
                carbs: 58,
                fat: 0
            }
        );
    }

    #[test]
    fn test_non_positive_yield_counts_as_one_serving() {
        assert_eq!(recipe(0.0).per_serving().calories, 2150);
        assert_eq!(recipe(-2.0).per_serving().protein, 160);
    }

    #[test]
    fn test_yield_round_trips_under_its_wire_name() {
        let json = serde_json::to_value(recipe(2.0)).unwrap();
        assert_eq!(json["yield"], 2.0);
        assert_eq!(json["ingredientLines"][1], "1 lb chicken");
    }
}
