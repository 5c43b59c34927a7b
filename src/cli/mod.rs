//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod item;
pub mod price;

pub use export::{handle_export_command, ExportArgs};
pub use item::{handle_item_command, ItemCommands};
pub use price::{handle_price_command, PriceCommands};
