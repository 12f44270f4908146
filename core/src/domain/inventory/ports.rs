use crate::domain::inventory::entities::{InventoryItem, PersistenceError};

/// A single named slot holding the whole inventory, rewritten on every save.
#[cfg_attr(test, mockall::automock)]
pub trait InventoryStore: Send + Sync {
    fn load(&self) -> Result<Vec<InventoryItem>, PersistenceError>;

    fn save(&self, items: &[InventoryItem]) -> Result<(), PersistenceError>;
}
