pub mod capture;
pub mod chat;
pub mod common;
pub mod food_catalog;
pub mod food_detection;
pub mod inventory;
pub mod nutrition;
pub mod recipe;
