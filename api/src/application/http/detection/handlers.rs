pub mod detect_food;
