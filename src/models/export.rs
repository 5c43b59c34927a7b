//! Export rows, formats and results

use serde::{Deserialize, Serialize};
use std::fmt;

use super::item::Item;
use super::rate::Rate;

/// Column headers, in row order
pub const EXPORT_HEADERS: [&str; 8] = [
    "Item Code",
    "Item Name",
    "Hotkey",
    "Is Weight Item",
    "Shelf Life In Days",
    "Barcode Type",
    "DB Code",
    "Price",
];

/// Output format of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExportFormat {
    /// Single-sheet .xlsx workbook
    #[default]
    Excel,
    /// UTF-8 CSV with a byte-order mark
    #[serde(rename = "CSV")]
    Csv,
}

impl ExportFormat {
    /// Parse a format selector, case-insensitively
    ///
    /// Returns `None` for selectors that name neither format.
    pub fn parse(selector: &str) -> Option<Self> {
        match selector.trim().to_ascii_lowercase().as_str() {
            "excel" | "xlsx" => Some(Self::Excel),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    /// Fixed output file name for this format
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Excel => "itemplus.xlsx",
            Self::Csv => "itemplus.csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excel => write!(f, "Excel"),
            Self::Csv => write!(f, "CSV"),
        }
    }
}

/// One exported line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub item_code: String,
    pub item_name: String,
    pub hotkey: String,
    pub is_weight_item: bool,
    pub shelf_life: String,
    pub barcode_type: String,
    pub db_code: String,
    /// Empty when no price entry matched
    pub price: String,
}

impl ExportRow {
    /// Assemble a row; missing optional fields become empty strings
    pub fn from_item(item: &Item, barcode_type: &str, db_code: &str, price: Option<Rate>) -> Self {
        Self {
            item_code: item.item_code.clone(),
            item_name: item.item_name.clone(),
            hotkey: item.hotkey.clone().unwrap_or_default(),
            is_weight_item: item.is_weight_item,
            shelf_life: item
                .shelf_life_in_days
                .map(|days| days.to_string())
                .unwrap_or_default(),
            barcode_type: barcode_type.to_string(),
            db_code: db_code.to_string(),
            price: price.map(|rate| rate.to_string()).unwrap_or_default(),
        }
    }

    /// Cell values in header order
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.item_code.clone(),
            self.item_name.clone(),
            self.hotkey.clone(),
            if self.is_weight_item { "1" } else { "0" }.to_string(),
            self.shelf_life.clone(),
            self.barcode_type.clone(),
            self.db_code.clone(),
            self.price.clone(),
        ]
    }
}

/// Location of a written export file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Site-relative download URL, e.g. `/files/itemplus.csv`
    pub file_url: String,
    pub file_name: String,
}

/// What an export call hands back to its caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExportOutcome {
    File(FileDescriptor),
    Error { error: String },
}

impl ExportOutcome {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn file(&self) -> Option<&FileDescriptor> {
        match self {
            Self::File(descriptor) => Some(descriptor),
            Self::Error { .. } => None,
        }
    }
}
