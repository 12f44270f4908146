use crate::domain::{food_detection::entities::normalize_food_name, nutrition::NutrientInfo};

struct Entry {
    name: &'static str,
    values: [f64; 6],
    benefits: &'static [&'static str],
    diets: &'static [&'static str],
}

/// Per 100 g: calories, protein, carbs, fat, fiber, sugar.
const TABLE: [Entry; 10] = [
    Entry {
        name: "apple",
        values: [52.0, 0.3, 13.8, 0.2, 2.4, 10.4],
        benefits: &[
            "Rich in antioxidants",
            "Supports heart health",
            "Improves gut bacteria",
            "May help lower cholesterol",
        ],
        diets: &["Vegan", "Vegetarian", "Gluten-Free", "Paleo"],
    },
    Entry {
        name: "banana",
        values: [89.0, 1.1, 22.8, 0.3, 2.6, 12.2],
        benefits: &[
            "Good source of potassium",
            "Supports digestive health",
            "Rich in vitamin B6",
            "Provides energy boost",
        ],
        diets: &["Vegan", "Vegetarian", "Gluten-Free"],
    },
    Entry {
        name: "broccoli",
        values: [34.0, 2.8, 6.6, 0.4, 2.6, 1.7],
        benefits: &[
            "Packed with vitamins and minerals",
            "Contains potent antioxidants",
            "Rich in fiber",
            "Supports detoxification",
        ],
        diets: &["Vegan", "Vegetarian", "Gluten-Free", "Keto", "Paleo"],
    },
    Entry {
        name: "carrot",
        values: [41.0, 0.9, 9.6, 0.2, 2.8, 4.7],
        benefits: &[
            "Rich in beta-carotene",
            "Promotes eye health",
            "Boosts immune system",
            "Supports skin health",
        ],
        diets: &["Vegan", "Vegetarian", "Gluten-Free", "Paleo"],
    },
    Entry {
        name: "salmon",
        values: [208.0, 20.4, 0.0, 13.4, 0.0, 0.0],
        benefits: &[
            "Excellent source of omega-3 fatty acids",
            "High in protein",
            "Rich in B vitamins",
            "Good source of potassium and selenium",
        ],
        diets: &["Gluten-Free", "Keto", "Paleo"],
    },
    Entry {
        name: "chicken",
        values: [165.0, 31.0, 0.0, 3.6, 0.0, 0.0],
        benefits: &[
            "Excellent source of protein",
            "Rich in vitamins and minerals",
            "Supports muscle growth",
            "Low in fat (without skin)",
        ],
        diets: &["Gluten-Free", "Keto", "Paleo"],
    },
    Entry {
        name: "rice",
        values: [130.0, 2.7, 28.2, 0.3, 0.4, 0.1],
        benefits: &[
            "Good source of energy",
            "Easy to digest",
            "Naturally gluten-free",
            "Low in fat",
        ],
        diets: &["Vegan", "Vegetarian", "Gluten-Free"],
    },
    Entry {
        name: "pasta",
        values: [158.0, 5.8, 30.9, 0.9, 1.8, 0.6],
        benefits: &[
            "Good source of complex carbohydrates",
            "Provides sustained energy",
            "Contains essential minerals",
            "Low in sodium and cholesterol",
        ],
        diets: &["Vegetarian"],
    },
    Entry {
        name: "avocado",
        values: [160.0, 2.0, 8.5, 14.7, 6.7, 0.7],
        benefits: &[
            "Rich in healthy fats",
            "High in fiber",
            "Contains more potassium than bananas",
            "Loaded with antioxidants",
        ],
        diets: &["Vegan", "Vegetarian", "Gluten-Free", "Keto", "Paleo"],
    },
    Entry {
        name: "eggs",
        values: [155.0, 12.6, 0.6, 10.6, 0.0, 0.6],
        benefits: &[
            "Complete source of protein",
            "Rich in choline, which supports brain health",
            "Contains lutein and zeaxanthin for eye health",
            "Good source of vitamin D",
        ],
        diets: &["Vegetarian", "Gluten-Free", "Keto", "Paleo"],
    },
];

const DEFAULT_ENTRY: Entry = Entry {
    name: "",
    values: [100.0, 2.0, 15.0, 2.0, 1.0, 5.0],
    benefits: &[
        "Nutritional information not available",
        "Consider researching this food further",
    ],
    diets: &["Unknown"],
};

impl Entry {
    fn to_info(&self) -> NutrientInfo {
        let [calories, protein, carbs, fat, fiber, sugar] = self.values;
        NutrientInfo {
            calories,
            protein,
            carbs,
            fat,
            fiber,
            sugar,
            benefits: self.benefits.iter().map(|s| s.to_string()).collect(),
            dietary_suitability: self.diets.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub fn is_known_food(name: &str) -> bool {
    let name = normalize_food_name(name);
    TABLE.iter().any(|entry| entry.name == name)
}

/// Table lookup by normalized name; unknown foods get the default entry.
pub fn get_nutrient_data(name: &str) -> NutrientInfo {
    let name = normalize_food_name(name);
    TABLE
        .iter()
        .find(|entry| entry.name == name)
        .unwrap_or(&DEFAULT_ENTRY)
        .to_info()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_normalizes_name() {
        let info = get_nutrient_data("  Banana ");
        assert_eq!(info.calories, 89.0);
        assert_eq!(info.dietary_suitability, vec!["Vegan", "Vegetarian", "Gluten-Free"]);
        assert!(is_known_food("EGGS"));
    }

    #[test]
    fn test_unknown_food_gets_default_entry() {
        let info = get_nutrient_data("durian");
        assert_eq!(
            (info.calories, info.protein, info.carbs, info.fat, info.fiber, info.sugar),
            (100.0, 2.0, 15.0, 2.0, 1.0, 5.0)
        );
        assert_eq!(info.dietary_suitability, vec!["Unknown"]);
        assert_eq!(info.benefits[0], "Nutritional information not available");
        assert!(!is_known_food("durian"));
    }

    #[test]
    fn test_every_heuristic_label_has_an_entry() {
        use crate::domain::food_detection::value_objects::FoodLabel;

        for label in FoodLabel::ALL
            .iter()
            .filter(|label| **label != FoodLabel::Unknown)
        {
            assert!(is_known_food(label.as_str()), "{label} missing");
        }
    }
}
