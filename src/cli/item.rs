//! Item CLI commands
//!
//! Implements CLI commands for item management. Every save runs the
//! validation hook.

use clap::Subcommand;

use crate::display::item::{format_item_details, format_item_list};
use crate::error::{ItemPlusError, ItemPlusResult};
use crate::models::Item;
use crate::services::{ItemService, PriceService, SaveKind};
use crate::storage::Storage;

/// Item subcommands
#[derive(Subcommand)]
pub enum ItemCommands {
    /// Create or update an item
    Save {
        /// Item code (5 characters)
        #[arg(short, long)]
        code: String,
        /// Item name
        #[arg(short, long)]
        name: String,
        /// Record identifier (defaults to the item code)
        #[arg(long)]
        id: Option<String>,
        /// Operator hotkey
        #[arg(short = 'k', long)]
        hotkey: Option<String>,
        /// Mark as a weight item
        #[arg(short, long)]
        weight: bool,
        /// Shelf life in days
        #[arg(short, long)]
        shelf_life: Option<u32>,
        /// Cost center for price resolution
        #[arg(long)]
        cost_center: Option<String>,
    },
    /// List items
    List {
        /// Only show weight items
        #[arg(short, long)]
        weight_only: bool,
    },
    /// Show item details and prices
    Show {
        /// Item identifier or code
        item: String,
    },
}

/// Handle an item command
pub fn handle_item_command(storage: &Storage, cmd: ItemCommands) -> ItemPlusResult<()> {
    let service = ItemService::new(storage);

    match cmd {
        ItemCommands::Save {
            code,
            name,
            id,
            hotkey,
            weight,
            shelf_life,
            cost_center,
        } => {
            let mut item = Item::new(code.trim(), name.trim());
            if let Some(id) = id {
                item.name = id;
            }
            item.hotkey = hotkey.filter(|h| !h.trim().is_empty());
            item.is_weight_item = weight;
            item.shelf_life_in_days = shelf_life;
            item.cost_center = cost_center.filter(|c| !c.trim().is_empty());

            let label = item.to_string();
            match service.save(item)? {
                SaveKind::Created => println!("Created item: {}", label),
                SaveKind::Updated => println!("Updated item: {}", label),
            }
        }

        ItemCommands::List { weight_only } => {
            let items = service.list(weight_only)?;
            println!("{}", format_item_list(&items));
        }

        ItemCommands::Show { item } => {
            let found = service
                .find(&item)?
                .ok_or_else(|| ItemPlusError::item_not_found(&item))?;
            let prices = PriceService::new(storage).list(Some(&found.item_code))?;
            println!("{}", format_item_details(&found, &prices));
        }
    }

    Ok(())
}
