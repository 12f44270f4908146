use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::domain::inventory::{
    entities::{InventoryItem, PersistenceError},
    ports::InventoryStore,
};

pub const INVENTORY_FILE: &str = "inventory.json";

/// Stores the whole inventory as one JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileInventoryStore {
    path: PathBuf,
}

impl JsonFileInventoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(INVENTORY_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InventoryStore for JsonFileInventoryStore {
    fn load(&self) -> Result<Vec<InventoryItem>, PersistenceError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(PersistenceError::Io(e.to_string())),
        };

        serde_json::from_slice(&data).map_err(|e| PersistenceError::Serialization(e.to_string()))
    }

    fn save(&self, items: &[InventoryItem]) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PersistenceError::Io(e.to_string()))?;
        }

        let data = serde_json::to_vec_pretty(items)
            .map_err(|e| PersistenceError::Serialization(e.to_string()))?;

        // replaced atomically via a sibling temp file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data).map_err(|e| PersistenceError::Io(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| PersistenceError::Io(e.to_string()))
    }
}
