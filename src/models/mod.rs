//! Core data models for ItemPlus
//!
//! This module contains the records the export and validation logic works
//! with: items, their price entries, and the ephemeral export rows/results.

pub mod export;
pub mod item;
pub mod price;
pub mod rate;

pub use export::{ExportFormat, ExportOutcome, ExportRow, FileDescriptor, EXPORT_HEADERS};
pub use item::{Item, ItemValidationError, ITEM_CODE_LENGTH};
pub use price::{ItemPrice, PriceFilter};
pub use rate::{Rate, RateParseError};
