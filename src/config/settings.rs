//! Export settings for ItemPlus
//!
//! Holds the constant columns stamped on every export row and the
//! presentation options of the spreadsheet writer.

use serde::{Deserialize, Serialize};

use super::paths::SitePaths;
use crate::error::ItemPlusError;
use crate::models::ExportFormat;

/// Site settings for ItemPlus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Value of the "Barcode Type" column on every row
    #[serde(default = "default_barcode_type")]
    pub barcode_type: String,

    /// Value of the "DB Code" column on every row
    #[serde(default = "default_db_code")]
    pub db_code: String,

    /// Format used when the caller does not pick one
    #[serde(default)]
    pub default_format: ExportFormat,

    /// Width applied to every spreadsheet column
    #[serde(default = "default_column_width")]
    pub column_width: f64,

    /// Header fill color, `#RRGGBB`
    #[serde(default = "default_header_fill")]
    pub header_fill: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_barcode_type() -> String {
    "EAN13".to_string()
}

fn default_db_code() -> String {
    "1".to_string()
}

fn default_column_width() -> f64 {
    20.0
}

fn default_header_fill() -> String {
    "#D9E1F2".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            barcode_type: default_barcode_type(),
            db_code: default_db_code(),
            default_format: ExportFormat::default(),
            column_width: default_column_width(),
            header_fill: default_header_fill(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SitePaths) -> Result<Self, ItemPlusError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ItemPlusError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ItemPlusError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SitePaths) -> Result<(), ItemPlusError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ItemPlusError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ItemPlusError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Parse `header_fill` into a 24-bit RGB value
    pub fn header_fill_rgb(&self) -> Result<u32, ItemPlusError> {
        let hex = self.header_fill.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ItemPlusError::Config(format!(
                "Invalid header fill color: {}",
                self.header_fill
            )));
        }
        u32::from_str_radix(hex, 16).map_err(|_| {
            ItemPlusError::Config(format!("Invalid header fill color: {}", self.header_fill))
        })
    }
}
