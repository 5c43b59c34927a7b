//! Storage layer for ItemPlus
//!
//! Provides JSON file storage with atomic writes, the public files area, and
//! the `ItemRepository` seam the export service reads through.

pub mod file_io;
pub mod init;
pub mod items;
pub mod prices;
pub mod public_files;

pub use file_io::{read_json, write_bytes_atomic, write_json_atomic};
pub use init::initialize_storage;
pub use items::ItemStore;
pub use prices::PriceStore;
pub use public_files::PublicFiles;

use crate::config::paths::SitePaths;
use crate::error::{ItemPlusError, ItemPlusResult};
use crate::models::{Item, PriceFilter, Rate};

/// Read access to items and prices needed by the export
pub trait ItemRepository {
    /// Fetch an item by identifier
    fn get_item(&self, id: &str) -> ItemPlusResult<Option<Item>>;

    /// Identifiers of all items matching the predicate, in a stable order
    fn list_item_ids(&self, predicate: &dyn Fn(&Item) -> bool) -> ItemPlusResult<Vec<String>>;

    /// Rate of the first price entry matching the filter
    fn find_price(&self, filter: &PriceFilter) -> ItemPlusResult<Option<Rate>>;
}

/// Main storage coordinator that provides access to all stores
pub struct Storage {
    paths: SitePaths,
    pub items: ItemStore,
    pub prices: PriceStore,
    pub public_files: PublicFiles,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SitePaths) -> Result<Self, ItemPlusError> {
        paths.ensure_directories()?;

        Ok(Self {
            items: ItemStore::new(paths.items_file()),
            prices: PriceStore::new(paths.prices_file()),
            public_files: PublicFiles::new(paths.public_files_dir()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SitePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ItemPlusError> {
        self.items.load()?;
        self.prices.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), ItemPlusError> {
        self.items.save()?;
        self.prices.save()?;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

impl ItemRepository for Storage {
    fn get_item(&self, id: &str) -> ItemPlusResult<Option<Item>> {
        match self.items.get(id)? {
            Some(item) => Ok(Some(item)),
            None => self.items.get_by_code(id),
        }
    }

    fn list_item_ids(&self, predicate: &dyn Fn(&Item) -> bool) -> ItemPlusResult<Vec<String>> {
        Ok(self
            .items
            .get_all()?
            .into_iter()
            .filter(|item| predicate(item))
            .map(|item| item.name)
            .collect())
    }

    fn find_price(&self, filter: &PriceFilter) -> ItemPlusResult<Option<Rate>> {
        Ok(self.prices.find_first(filter)?.map(|p| p.rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemPrice;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SitePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_test_storage();

        assert!(temp_dir.path().join("data").exists());
        assert!(temp_dir.path().join("public").join("files").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_list_item_ids_with_predicate() {
        let (_temp_dir, storage) = create_test_storage();
        storage.items.upsert(Item::weight_item("10002", "Pears", "P")).unwrap();
        storage.items.upsert(Item::new("10001", "Bread")).unwrap();
        storage.items.upsert(Item::weight_item("10003", "Apples", "A")).unwrap();

        let ids = storage.list_item_ids(&|i: &Item| i.is_weight_item).unwrap();
        assert_eq!(ids, vec!["10002", "10003"]);
    }

    #[test]
    fn test_get_item_falls_back_to_code() {
        let (_temp_dir, storage) = create_test_storage();
        let mut item = Item::new("10001", "Bread");
        item.name = "ITEM-1".into();
        storage.items.upsert(item).unwrap();

        assert!(storage.get_item("ITEM-1").unwrap().is_some());
        assert!(storage.get_item("10001").unwrap().is_some());
        assert!(storage.get_item("nope").unwrap().is_none());
    }

    #[test]
    fn test_find_price() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .prices
            .insert(ItemPrice::selling("10001", Rate::from_cents(450)))
            .unwrap();

        let filter = PriceFilter::for_item("10001", None, None);
        assert_eq!(
            storage.find_price(&filter).unwrap(),
            Some(Rate::from_cents(450))
        );
    }

    #[test]
    fn test_save_all_and_reload() {
        let (temp_dir, storage) = create_test_storage();
        storage.items.upsert(Item::new("10001", "Bread")).unwrap();
        storage
            .prices
            .insert(ItemPrice::selling("10001", Rate::from_cents(450)))
            .unwrap();
        storage.save_all().unwrap();

        let paths = SitePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(reloaded.items.count().unwrap(), 1);
        assert_eq!(reloaded.prices.count().unwrap(), 1);
    }
}
