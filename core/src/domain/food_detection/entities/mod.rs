pub mod detection_result;
pub mod errors;
pub mod food_item;

pub use detection_result::*;
pub use errors::*;
pub use food_item::*;
