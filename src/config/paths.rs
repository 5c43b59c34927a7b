//! Path management for ItemPlus
//!
//! Resolves the site directory that stands in for the host framework site:
//! settings, item data, the public files root and the error log all live
//! beneath it.
//!
//! ## Path Resolution Order
//!
//! 1. `ITEMPLUS_SITE_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/itemplus` or `~/.config/itemplus`
//! 3. Windows: `%APPDATA%\itemplus`

use std::path::PathBuf;

use crate::error::ItemPlusError;

/// Environment variable overriding the site directory
pub const SITE_DIR_ENV: &str = "ITEMPLUS_SITE_DIR";

/// Manages all paths used by ItemPlus
#[derive(Debug, Clone)]
pub struct SitePaths {
    /// Base directory of the site
    base_dir: PathBuf,
}

impl SitePaths {
    /// Create a new SitePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/appdata directory can be determined.
    pub fn new() -> Result<Self, ItemPlusError> {
        let base_dir = if let Ok(custom) = std::env::var(SITE_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SitePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<site>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the public files root (`<site>/public/files/`)
    pub fn public_files_dir(&self) -> PathBuf {
        self.base_dir.join("public").join("files")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the error log
    pub fn error_log(&self) -> PathBuf {
        self.base_dir.join("error.log")
    }

    /// Get the path to items.json
    pub fn items_file(&self) -> PathBuf {
        self.data_dir().join("items.json")
    }

    /// Get the path to item_prices.json
    pub fn prices_file(&self) -> PathBuf {
        self.data_dir().join("item_prices.json")
    }

    /// Ensure the base, data and public files directories exist
    pub fn ensure_directories(&self) -> Result<(), ItemPlusError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ItemPlusError::Io(format!("Failed to create site directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ItemPlusError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.public_files_dir()).map_err(|e| {
            ItemPlusError::Io(format!("Failed to create public files directory: {}", e))
        })?;

        Ok(())
    }

    /// Check if the site has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ItemPlusError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                ItemPlusError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("itemplus"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ItemPlusError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ItemPlusError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("itemplus"))
}
