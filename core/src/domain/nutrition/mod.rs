pub mod entities;
pub mod table;

pub use entities::NutrientInfo;
pub use table::{get_nutrient_data, is_known_food};
