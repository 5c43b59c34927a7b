//! Item service
//!
//! Saving an item (create or update) always passes through the validation
//! hook; a rejected item is never persisted.

use tracing::{debug, info, warn};

use crate::error::{ItemPlusError, ItemPlusResult};
use crate::models::Item;
use crate::storage::Storage;

/// Whether a save created a new record or replaced an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Created,
    Updated,
}

/// Service for item management
pub struct ItemService<'a> {
    storage: &'a Storage,
}

/// Validation hook run on every item save
pub fn on_item_save(item: &Item) -> ItemPlusResult<()> {
    item.validate()
        .map_err(|e| ItemPlusError::Validation(e.to_string()))
}

impl<'a> ItemService<'a> {
    /// Create a new item service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and persist an item
    pub fn save(&self, item: Item) -> ItemPlusResult<SaveKind> {
        on_item_save(&item)?;

        // Item codes are unique across records
        if let Some(existing) = self.storage.items.get_by_code(&item.item_code)? {
            if existing.name != item.name {
                return Err(ItemPlusError::Duplicate {
                    entity_type: "Item",
                    identifier: format!("{} (record {})", item.item_code, existing.name),
                });
            }
        }

        let previous = self.storage.items.get(&item.name)?;
        let kind = if previous.is_some() {
            SaveKind::Updated
        } else {
            SaveKind::Created
        };

        debug!(item = %item.name, ?kind, "Saving item");
        self.storage.items.upsert(item.clone())?;
        if let Err(e) = self.storage.items.save() {
            // The store must keep matching what is on disk
            warn!(item = %item.name, error = %e, "Item save failed, restoring previous state");
            match previous {
                Some(previous) => self.storage.items.upsert(previous)?,
                None => {
                    self.storage.items.delete(&item.name)?;
                }
            }
            return Err(e);
        }
        info!(item = %item.name, code = %item.item_code, ?kind, "Item saved");

        Ok(kind)
    }

    /// Get an item by record identifier or item code
    pub fn find(&self, identifier: &str) -> ItemPlusResult<Option<Item>> {
        match self.storage.items.get(identifier)? {
            Some(item) => Ok(Some(item)),
            None => self.storage.items.get_by_code(identifier),
        }
    }

    /// List items, optionally only weight items
    pub fn list(&self, weight_only: bool) -> ItemPlusResult<Vec<Item>> {
        let items = self.storage.items.get_all()?;
        Ok(if weight_only {
            items.into_iter().filter(|i| i.is_weight_item).collect()
        } else {
            items
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SitePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SitePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_save_weight_item() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ItemService::new(&storage);

        let kind = service.save(Item::weight_item("10001", "Apples", "A1")).unwrap();
        assert_eq!(kind, SaveKind::Created);
        assert!(storage.paths().items_file().exists());
        assert!(service.find("10001").unwrap().is_some());
    }

    #[test]
    fn test_weight_item_without_hotkey_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ItemService::new(&storage);

        let mut item = Item::new("10001", "Apples");
        item.is_weight_item = true;

        let err = service.save(item).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: Custom Hotkey is required for weight items."
        );
        assert_eq!(storage.items.count().unwrap(), 0);
    }

    #[test]
    fn test_bad_code_length_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ItemService::new(&storage);

        let err = service.save(Item::new("123", "Short")).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Item Code must be 5 numbers.");
    }

    #[test]
    fn test_update_runs_hook_again() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ItemService::new(&storage);
        service.save(Item::weight_item("10001", "Apples", "A1")).unwrap();

        let mut item = service.find("10001").unwrap().unwrap();
        item.hotkey = None;
        assert!(service.save(item).unwrap_err().is_validation());

        let mut item = service.find("10001").unwrap().unwrap();
        item.item_name = "Red Apples".into();
        assert_eq!(service.save(item).unwrap(), SaveKind::Updated);
        assert_eq!(
            service.find("10001").unwrap().unwrap().item_name,
            "Red Apples"
        );
    }

    #[test]
    fn test_non_weight_item_with_hotkey_accepted() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ItemService::new(&storage);

        let mut item = Item::new("20001", "Bread");
        item.hotkey = Some("B".into());
        assert!(service.save(item).is_ok());
    }

    #[test]
    fn test_duplicate_code_under_new_record_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ItemService::new(&storage);
        service.save(Item::new("10001", "Bread")).unwrap();

        let mut other = Item::new("10001", "Other bread");
        other.name = "ITEM-2".into();
        assert!(matches!(
            service.save(other),
            Err(ItemPlusError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ItemService::new(&storage);
        service.save(Item::weight_item("10001", "Apples", "A1")).unwrap();

        // A directory where the items file should be makes every write fail
        let items_file = storage.paths().items_file();
        std::fs::remove_file(&items_file).unwrap();
        std::fs::create_dir_all(items_file.join("blocked")).unwrap();

        let err = service.save(Item::new("10002", "Bread")).unwrap_err();
        assert!(matches!(err, ItemPlusError::Storage(_)));
        assert!(service.find("10002").unwrap().is_none());
        assert_eq!(storage.items.count().unwrap(), 1);

        let mut renamed = service.find("10001").unwrap().unwrap();
        renamed.item_name = "Red Apples".into();
        assert!(service.save(renamed).is_err());
        assert_eq!(service.find("10001").unwrap().unwrap().item_name, "Apples");
    }

    #[test]
    fn test_list_weight_only() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ItemService::new(&storage);
        service.save(Item::weight_item("10001", "Apples", "A1")).unwrap();
        service.save(Item::new("10002", "Bread")).unwrap();

        assert_eq!(service.list(false).unwrap().len(), 2);
        assert_eq!(service.list(true).unwrap().len(), 1);
    }
}
