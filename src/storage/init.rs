//! Storage initialization
//!
//! Handles first-run setup of a site directory

use crate::config::paths::SitePaths;
use crate::error::ItemPlusError;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh site
///
/// Creates the directory layout and empty item/price files. Existing data is
/// left untouched.
pub fn initialize_storage(paths: &SitePaths) -> Result<(), ItemPlusError> {
    paths.ensure_directories()?;

    if !paths.items_file().exists() {
        write_json_atomic(paths.items_file(), &serde_json::json!({ "items": [] }))?;
    }

    if !paths.prices_file().exists() {
        write_json_atomic(paths.prices_file(), &serde_json::json!({ "prices": [] }))?;
    }

    Ok(())
}
