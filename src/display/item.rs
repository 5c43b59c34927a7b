//! Item and price display formatting
//!
//! Formats items and price entries for terminal output in table and detail
//! views.

use crate::models::{Item, ItemPrice};

/// Format a list of items as a table
pub fn format_item_list(items: &[Item]) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }

    let name_width = items
        .iter()
        .map(|i| i.item_name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<5}  {:<name_width$}  {:<8}  {:<6}  {:>10}\n",
        "Code",
        "Name",
        "Hotkey",
        "Weight",
        "Shelf Life",
        name_width = name_width,
    ));

    output.push_str(&format!(
        "{:-<5}  {:-<name_width$}  {:-<8}  {:-<6}  {:->10}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for item in items {
        output.push_str(&format!(
            "{:<5}  {:<name_width$}  {:<8}  {:<6}  {:>10}\n",
            item.item_code,
            item.item_name,
            item.hotkey.as_deref().unwrap_or(""),
            if item.is_weight_item { "Yes" } else { "No" },
            item.shelf_life_in_days
                .map(|d| format!("{} days", d))
                .unwrap_or_default(),
            name_width = name_width,
        ));
    }

    output.push_str(&format!("\nTotal: {} items", items.len()));
    output
}

/// Format a single item's details along with its price entries
pub fn format_item_details(item: &Item, prices: &[ItemPrice]) -> String {
    let mut output = String::new();

    output.push_str(&format!("Item: {}\n", item.item_name));
    output.push_str(&format!("  Code:         {}\n", item.item_code));
    output.push_str(&format!("  Record:       {}\n", item.name));
    output.push_str(&format!(
        "  Weight Item:  {}\n",
        if item.is_weight_item { "Yes" } else { "No" }
    ));
    output.push_str(&format!(
        "  Hotkey:       {}\n",
        item.hotkey.as_deref().unwrap_or("(none)")
    ));
    if let Some(days) = item.shelf_life_in_days {
        output.push_str(&format!("  Shelf Life:   {} days\n", days));
    }
    if let Some(cc) = &item.cost_center {
        output.push_str(&format!("  Cost Center:  {}\n", cc));
    }

    output.push('\n');
    if prices.is_empty() {
        output.push_str("  No prices.\n");
    } else {
        output.push_str("  Prices:\n");
        for price in prices {
            output.push_str(&format!("    {}\n", describe_price(price)));
        }
    }

    output
}

/// Format price entries as a table
pub fn format_price_list(prices: &[ItemPrice]) -> String {
    if prices.is_empty() {
        return "No prices found.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<5}  {:>10}  {:<20}  {:<20}  {}\n",
        "Code", "Rate", "Price List", "Cost Center", "Type"
    ));
    output.push_str(&format!("{}\n", "-".repeat(70)));

    for price in prices {
        output.push_str(&format!(
            "{:<5}  {:>10}  {:<20}  {:<20}  {}\n",
            price.item_code,
            price.rate.to_string(),
            price.price_list.as_deref().unwrap_or(""),
            price.cost_center.as_deref().unwrap_or(""),
            if price.selling { "Selling" } else { "Buying" },
        ));
    }

    output
}

fn describe_price(price: &ItemPrice) -> String {
    let mut parts = vec![price.rate.to_string()];
    if let Some(list) = &price.price_list {
        parts.push(format!("list: {}", list));
    }
    if let Some(cc) = &price.cost_center {
        parts.push(format!("cost center: {}", cc));
    }
    parts.push(if price.selling { "selling" } else { "buying" }.to_string());
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rate;

    #[test]
    fn test_format_item_list() {
        let mut apples = Item::weight_item("10001", "Apples", "A1");
        apples.shelf_life_in_days = Some(7);
        let items = vec![apples, Item::new("10002", "Bread")];

        let output = format_item_list(&items);
        assert!(output.contains("Apples"));
        assert!(output.contains("7 days"));
        assert!(output.contains("Total: 2 items"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_item_list(&[]), "No items found.");
        assert_eq!(format_price_list(&[]), "No prices found.");
    }

    #[test]
    fn test_format_item_details() {
        let item = Item::weight_item("10001", "Apples", "A1");
        let prices = vec![
            ItemPrice::in_price_list("10001", "Retail", Rate::from_cents(349)),
            ItemPrice::selling("10001", Rate::from_cents(299)).with_cost_center("Main"),
        ];

        let output = format_item_details(&item, &prices);
        assert!(output.contains("Hotkey:       A1"));
        assert!(output.contains("3.49, list: Retail, selling"));
        assert!(output.contains("2.99, cost center: Main, selling"));
    }
}
