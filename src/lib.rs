//! ItemPlus - weight item export and item save validation
//!
//! This library exports weight items (items sold by weight on scales) to a
//! CSV file or an Excel workbook, enriched with prices, and validates item
//! records whenever they are saved.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Site paths and export settings
//! - `error`: Custom error types
//! - `error_log`: Persistent log of export failures
//! - `models`: Items, price entries, export rows and results
//! - `storage`: JSON file storage, the public files area, and the
//!   `ItemRepository` seam
//! - `export`: CSV and Excel table writers
//! - `services`: Selection, price resolution, export and the save hook
//! - `cli` / `display`: Command-line front end
//!
//! # Example
//!
//! ```rust,ignore
//! use itemplus::config::{SitePaths, Settings};
//! use itemplus::error_log::ErrorLog;
//! use itemplus::services::ExportService;
//! use itemplus::storage::Storage;
//!
//! let paths = SitePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths.clone())?;
//! storage.load_all()?;
//! let error_log = ErrorLog::new(paths.error_log());
//!
//! let outcome = ExportService::from_storage(&storage, &settings, &error_log)
//!     .export_items(None, Some("Retail"), Some("CSV"))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod error_log;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ItemPlusError, ItemPlusResult};
