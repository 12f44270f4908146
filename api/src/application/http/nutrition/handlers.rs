pub mod get_nutrients;
pub mod search_foods;
