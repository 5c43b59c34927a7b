//! Price CLI commands

use clap::Subcommand;

use crate::display::item::format_price_list;
use crate::error::{ItemPlusError, ItemPlusResult};
use crate::models::Rate;
use crate::services::PriceService;
use crate::storage::Storage;

/// Price subcommands
#[derive(Subcommand)]
pub enum PriceCommands {
    /// Add a price entry
    Add {
        /// Item code
        item_code: String,
        /// Rate (e.g., "2.99")
        rate: String,
        /// Price list name
        #[arg(short, long)]
        price_list: Option<String>,
        /// Cost center scope
        #[arg(short, long)]
        cost_center: Option<String>,
        /// Record as a buying price instead of a selling price
        #[arg(long)]
        buying: bool,
    },
    /// List price entries
    List {
        /// Only entries for this item code
        #[arg(short, long)]
        item: Option<String>,
    },
}

/// Handle a price command
pub fn handle_price_command(storage: &Storage, cmd: PriceCommands) -> ItemPlusResult<()> {
    let service = PriceService::new(storage);

    match cmd {
        PriceCommands::Add {
            item_code,
            rate,
            price_list,
            cost_center,
            buying,
        } => {
            let rate = Rate::parse(&rate).map_err(|e| ItemPlusError::Validation(e.to_string()))?;
            let price = service.add(
                &item_code,
                rate,
                price_list.as_deref(),
                cost_center.as_deref(),
                !buying,
            )?;
            println!("Added price {} for item {}", price.rate, price.item_code);
        }

        PriceCommands::List { item } => {
            let prices = service.list(item.as_deref())?;
            println!("{}", format_price_list(&prices));
        }
    }

    Ok(())
}
