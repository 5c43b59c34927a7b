//! Price service
//!
//! Adds and lists the price entries the export resolves rates from.

use tracing::info;

use crate::error::{ItemPlusError, ItemPlusResult};
use crate::models::{ItemPrice, Rate};
use crate::storage::Storage;

/// Service for price entry management
pub struct PriceService<'a> {
    storage: &'a Storage,
}

impl<'a> PriceService<'a> {
    /// Create a new price service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a price entry for an existing item
    pub fn add(
        &self,
        item_code: &str,
        rate: Rate,
        price_list: Option<&str>,
        cost_center: Option<&str>,
        selling: bool,
    ) -> ItemPlusResult<ItemPrice> {
        let item_code = item_code.trim();
        if self.storage.items.get_by_code(item_code)?.is_none() {
            return Err(ItemPlusError::item_not_found(item_code));
        }

        if rate.is_negative() {
            return Err(ItemPlusError::Validation(format!(
                "Rate cannot be negative: {}",
                rate
            )));
        }

        let non_blank = |s: Option<&str>| {
            s.map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let price = ItemPrice {
            item_code: item_code.to_string(),
            price_list: non_blank(price_list),
            cost_center: non_blank(cost_center),
            selling,
            rate,
        };

        self.storage.prices.insert(price.clone())?;
        self.storage.prices.save()?;
        info!(item = %price.item_code, rate = %price.rate, "Price added");

        Ok(price)
    }

    /// List price entries, optionally for one item code
    pub fn list(&self, item_code: Option<&str>) -> ItemPlusResult<Vec<ItemPrice>> {
        match item_code {
            Some(code) => self.storage.prices.get_for_item(code),
            None => self.storage.prices.get_all(),
        }
    }
}
