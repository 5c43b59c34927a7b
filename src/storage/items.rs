//! Item store for JSON storage
//!
//! Manages loading and saving items to items.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ItemPlusError;
use crate::models::Item;

use super::file_io::{read_json, write_json_atomic};

/// Serializable item data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ItemData {
    items: Vec<Item>,
}

/// Store for item persistence, keyed by record identifier
pub struct ItemStore {
    path: PathBuf,
    data: RwLock<HashMap<String, Item>>,
}

impl ItemStore {
    /// Create a new item store
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load items from disk
    pub fn load(&self) -> Result<(), ItemPlusError> {
        let file_data: ItemData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            ItemPlusError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for item in file_data.items {
            data.insert(item.name.clone(), item);
        }

        Ok(())
    }

    /// Save items to disk
    pub fn save(&self) -> Result<(), ItemPlusError> {
        let items = self.get_all()?;
        write_json_atomic(&self.path, &ItemData { items })
    }

    /// Get an item by record identifier
    pub fn get(&self, name: &str) -> Result<Option<Item>, ItemPlusError> {
        let data = self.data.read().map_err(|e| {
            ItemPlusError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(name).cloned())
    }

    /// Get an item by its item code
    pub fn get_by_code(&self, item_code: &str) -> Result<Option<Item>, ItemPlusError> {
        let data = self.data.read().map_err(|e| {
            ItemPlusError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.values().find(|i| i.item_code == item_code).cloned())
    }

    /// Get all items, ordered by record identifier
    pub fn get_all(&self) -> Result<Vec<Item>, ItemPlusError> {
        let data = self.data.read().map_err(|e| {
            ItemPlusError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut items: Vec<_> = data.values().cloned().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    /// Insert or update an item
    pub fn upsert(&self, item: Item) -> Result<(), ItemPlusError> {
        let mut data = self.data.write().map_err(|e| {
            ItemPlusError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(item.name.clone(), item);
        Ok(())
    }

    /// Delete an item
    pub fn delete(&self, name: &str) -> Result<bool, ItemPlusError> {
        let mut data = self.data.write().map_err(|e| {
            ItemPlusError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data.remove(name).is_some())
    }

    pub fn count(&self) -> Result<usize, ItemPlusError> {
        let data = self.data.read().map_err(|e| {
            ItemPlusError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}
