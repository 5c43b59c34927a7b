//! Price resolution for export rows

use tracing::{debug, warn};

use crate::models::{Item, PriceFilter, Rate};
use crate::storage::ItemRepository;

/// Resolve the price of one item
///
/// With a price list, looks up (item code, price list). Without one, looks up
/// selling prices, scoped to the item's cost center when it has one. Lookup
/// failures are logged and treated as "no price".
pub fn resolve_price<R>(repo: &R, item: &Item, price_list: Option<&str>) -> Option<Rate>
where
    R: ItemRepository + ?Sized,
{
    let price_list = price_list.map(str::trim).filter(|p| !p.is_empty());
    let cost_center = item
        .cost_center
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    let filter = PriceFilter::for_item(&item.item_code, price_list, cost_center);

    match repo.find_price(&filter) {
        Ok(rate) => {
            debug!(item = %item.item_code, price = ?rate, "Resolved price");
            rate
        }
        Err(e) => {
            warn!(item = %item.item_code, error = %e, "Price lookup failed, leaving price empty");
            None
        }
    }
}
