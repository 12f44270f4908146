pub mod add_detection_to_inventory;
pub mod add_inventory_item;
pub mod list_inventory;
pub mod remove_inventory_item;
