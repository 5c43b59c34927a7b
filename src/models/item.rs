//! Item model
//!
//! An item record as the export and the save hook see it. Items flagged as
//! weight items are sold by weight on scales and need an operator hotkey.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Required length of an item code, in characters
pub const ITEM_CODE_LENGTH: usize = 5;

/// An item record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Record identifier (defaults to the item code)
    pub name: String,

    /// Item code, five characters on every saved item
    pub item_code: String,

    /// Display name
    pub item_name: String,

    /// Operator-facing hotkey, required for weight items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotkey: Option<String>,

    /// Whether the item is sold by weight
    #[serde(default)]
    pub is_weight_item: bool,

    /// Shelf life in days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelf_life_in_days: Option<u32>,

    /// Cost center used as the fallback price scope
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_center: Option<String>,

    #[serde(default)]
    pub disabled: bool,
}

impl Item {
    /// Create a new item whose record identifier is its code
    pub fn new(item_code: impl Into<String>, item_name: impl Into<String>) -> Self {
        let item_code = item_code.into();
        Self {
            name: item_code.clone(),
            item_code,
            item_name: item_name.into(),
            hotkey: None,
            is_weight_item: false,
            shelf_life_in_days: None,
            cost_center: None,
            disabled: false,
        }
    }

    /// Create a weight item with its hotkey
    pub fn weight_item(
        item_code: impl Into<String>,
        item_name: impl Into<String>,
        hotkey: impl Into<String>,
    ) -> Self {
        let mut item = Self::new(item_code, item_name);
        item.is_weight_item = true;
        item.hotkey = Some(hotkey.into());
        item
    }

    /// Whether a non-blank hotkey is set
    pub fn has_hotkey(&self) -> bool {
        self.hotkey
            .as_deref()
            .map(|h| !h.trim().is_empty())
            .unwrap_or(false)
    }

    /// Run the save-time rules
    ///
    /// The weight-item rule is checked before the code-length rule; the first
    /// violation is returned.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.is_weight_item && !self.has_hotkey() {
            return Err(ItemValidationError::MissingHotkey);
        }

        let len = self.item_code.chars().count();
        if len != ITEM_CODE_LENGTH {
            return Err(ItemValidationError::InvalidCodeLength(len));
        }

        Ok(())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.item_name, self.item_code)
    }
}

/// Reasons an item save is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    MissingHotkey,
    /// Carries the actual length
    InvalidCodeLength(usize),
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemValidationError::MissingHotkey => {
                write!(f, "Custom Hotkey is required for weight items.")
            }
            ItemValidationError::InvalidCodeLength(_) => {
                write!(f, "Item Code must be {} numbers.", ITEM_CODE_LENGTH)
            }
        }
    }
}

impl std::error::Error for ItemValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_uses_code_as_name() {
        let item = Item::new("10001", "Apples");
        assert_eq!(item.name, "10001");
        assert!(!item.is_weight_item);
        assert!(item.hotkey.is_none());
    }

    #[test]
    fn test_weight_item_without_hotkey_rejected() {
        let mut item = Item::new("10001", "Apples");
        item.is_weight_item = true;
        assert_eq!(item.validate(), Err(ItemValidationError::MissingHotkey));

        item.hotkey = Some("   ".into());
        assert_eq!(item.validate(), Err(ItemValidationError::MissingHotkey));
    }

    #[test]
    fn test_code_length_rejected() {
        let item = Item::new("1234", "Short");
        assert_eq!(
            item.validate(),
            Err(ItemValidationError::InvalidCodeLength(4))
        );

        let item = Item::new("123456", "Long");
        assert_eq!(
            item.validate(),
            Err(ItemValidationError::InvalidCodeLength(6))
        );
    }

    #[test]
    fn test_code_length_counts_characters() {
        let item = Item::new("ÄÖÜ12", "Umlauts");
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_non_weight_item_accepted_with_any_hotkey() {
        let mut item = Item::new("10001", "Bread");
        assert!(item.validate().is_ok());

        item.hotkey = Some("B1".into());
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_hotkey_rule_checked_first() {
        let mut item = Item::new("12", "Both wrong");
        item.is_weight_item = true;
        assert_eq!(item.validate(), Err(ItemValidationError::MissingHotkey));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ItemValidationError::MissingHotkey.to_string(),
            "Custom Hotkey is required for weight items."
        );
        assert_eq!(
            ItemValidationError::InvalidCodeLength(3).to_string(),
            "Item Code must be 5 numbers."
        );
    }

    #[test]
    fn test_optional_fields_default_on_deserialize() {
        let item: Item = serde_json::from_str(
            r#"{"name": "10001", "item_code": "10001", "item_name": "Apples"}"#,
        )
        .unwrap();
        assert!(!item.is_weight_item);
        assert!(item.shelf_life_in_days.is_none());
        assert!(item.cost_center.is_none());
    }
}
