//! Configuration module for ItemPlus
//!
//! This module provides configuration management including:
//! - Site directory resolution
//! - Export settings persistence

pub mod paths;
pub mod settings;

pub use paths::SitePaths;
pub use settings::Settings;
