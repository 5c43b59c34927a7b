//! Price entries and the filters used to look them up

use serde::{Deserialize, Serialize};

use super::rate::Rate;

/// A price entry for an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPrice {
    pub item_code: String,

    /// Price list this entry belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_list: Option<String>,

    /// Cost center this entry is scoped to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_center: Option<String>,

    /// Selling (true) or buying (false) price
    #[serde(default = "default_selling")]
    pub selling: bool,

    pub rate: Rate,
}

fn default_selling() -> bool {
    true
}

impl ItemPrice {
    /// Create a selling price with no price list or cost center
    pub fn selling(item_code: impl Into<String>, rate: Rate) -> Self {
        Self {
            item_code: item_code.into(),
            price_list: None,
            cost_center: None,
            selling: true,
            rate,
        }
    }

    /// Create a price entry on a named price list
    pub fn in_price_list(
        item_code: impl Into<String>,
        price_list: impl Into<String>,
        rate: Rate,
    ) -> Self {
        let mut price = Self::selling(item_code, rate);
        price.price_list = Some(price_list.into());
        price
    }

    /// Scope this entry to a cost center
    pub fn with_cost_center(mut self, cost_center: impl Into<String>) -> Self {
        self.cost_center = Some(cost_center.into());
        self
    }
}

/// Lookup key for a price entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceFilter {
    /// (item code, price list)
    ByPriceList {
        item_code: String,
        price_list: String,
    },
    /// (item code, selling = true), optionally narrowed to a cost center
    Selling {
        item_code: String,
        cost_center: Option<String>,
    },
}

impl PriceFilter {
    /// Build the filter for an item: an explicit price list wins, otherwise
    /// selling prices scoped to the item's cost center when it has one
    pub fn for_item(item_code: &str, price_list: Option<&str>, cost_center: Option<&str>) -> Self {
        match price_list {
            Some(list) => Self::ByPriceList {
                item_code: item_code.to_string(),
                price_list: list.to_string(),
            },
            None => Self::Selling {
                item_code: item_code.to_string(),
                cost_center: cost_center.map(str::to_string),
            },
        }
    }

    pub fn item_code(&self) -> &str {
        match self {
            Self::ByPriceList { item_code, .. } | Self::Selling { item_code, .. } => item_code,
        }
    }

    /// Whether a price entry satisfies this filter
    pub fn matches(&self, price: &ItemPrice) -> bool {
        match self {
            Self::ByPriceList {
                item_code,
                price_list,
            } => &price.item_code == item_code && price.price_list.as_ref() == Some(price_list),
            Self::Selling {
                item_code,
                cost_center,
            } => {
                &price.item_code == item_code
                    && price.selling
                    && match cost_center {
                        Some(cc) => price.cost_center.as_ref() == Some(cc),
                        None => true,
                    }
            }
        }
    }
}
