//! Price store for JSON storage
//!
//! Manages loading and saving price entries to item_prices.json. Entries keep
//! their insertion order, which decides the "first match" of a lookup.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ItemPlusError;
use crate::models::{ItemPrice, PriceFilter};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct PriceData {
    prices: Vec<ItemPrice>,
}

/// Store for price entry persistence
pub struct PriceStore {
    path: PathBuf,
    data: RwLock<Vec<ItemPrice>>,
}

impl PriceStore {
    /// Create a new price store
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load price entries from disk
    pub fn load(&self) -> Result<(), ItemPlusError> {
        let file_data: PriceData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            ItemPlusError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file_data.prices;

        Ok(())
    }

    /// Save price entries to disk
    pub fn save(&self) -> Result<(), ItemPlusError> {
        let prices = self.get_all()?;
        write_json_atomic(&self.path, &PriceData { prices })
    }

    pub fn get_all(&self) -> Result<Vec<ItemPrice>, ItemPlusError> {
        let data = self.data.read().map_err(|e| {
            ItemPlusError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.clone())
    }

    /// Entries for one item code, in insertion order
    pub fn get_for_item(&self, item_code: &str) -> Result<Vec<ItemPrice>, ItemPlusError> {
        let data = self.data.read().map_err(|e| {
            ItemPlusError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data
            .iter()
            .filter(|p| p.item_code == item_code)
            .cloned()
            .collect())
    }

    /// First entry matching the filter
    pub fn find_first(&self, filter: &PriceFilter) -> Result<Option<ItemPrice>, ItemPlusError> {
        let data = self.data.read().map_err(|e| {
            ItemPlusError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.iter().find(|p| filter.matches(p)).cloned())
    }

    /// Append an entry
    pub fn insert(&self, price: ItemPrice) -> Result<(), ItemPlusError> {
        let mut data = self.data.write().map_err(|e| {
            ItemPlusError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.push(price);
        Ok(())
    }

    pub fn count(&self) -> Result<usize, ItemPlusError> {
        let data = self.data.read().map_err(|e| {
            ItemPlusError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rate;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, PriceStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = PriceStore::new(temp_dir.path().join("item_prices.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_find_first_returns_earliest_match() {
        let (_temp_dir, store) = create_test_store();
        store
            .insert(ItemPrice::in_price_list("10001", "Retail", Rate::from_cents(100)))
            .unwrap();
        store
            .insert(ItemPrice::in_price_list("10001", "Retail", Rate::from_cents(200)))
            .unwrap();

        let filter = PriceFilter::for_item("10001", Some("Retail"), None);
        let found = store.find_first(&filter).unwrap().unwrap();
        assert_eq!(found.rate, Rate::from_cents(100));
    }

    #[test]
    fn test_find_first_no_match() {
        let (_temp_dir, store) = create_test_store();
        store
            .insert(ItemPrice::selling("10001", Rate::from_cents(100)))
            .unwrap();

        let filter = PriceFilter::for_item("10002", None, None);
        assert!(store.find_first(&filter).unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload_keeps_order() {
        let (temp_dir, store) = create_test_store();
        store
            .insert(ItemPrice::selling("10002", Rate::from_cents(50)))
            .unwrap();
        store
            .insert(ItemPrice::selling("10001", Rate::from_cents(75)))
            .unwrap();
        store.save().unwrap();

        let store2 = PriceStore::new(temp_dir.path().join("item_prices.json"));
        store2.load().unwrap();

        let codes: Vec<_> = store2
            .get_all()
            .unwrap()
            .into_iter()
            .map(|p| p.item_code)
            .collect();
        assert_eq!(codes, vec!["10002", "10001"]);
        assert_eq!(store2.get_for_item("10001").unwrap().len(), 1);
    }
}
