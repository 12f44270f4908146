pub mod food_catalog;
pub mod inventory;
pub mod llm;
pub mod model;
pub mod recipe;
