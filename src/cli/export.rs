//! CLI command for the weight item export
//!
//! Prints the export outcome as JSON, the same shape a host application
//! receives: `{"file_url", "file_name"}` or `{"error"}`.

use clap::Args;
use serde_json::Value;

use crate::config::Settings;
use crate::error::{ItemPlusError, ItemPlusResult};
use crate::error_log::ErrorLog;
use crate::models::ExportOutcome;
use crate::services::ExportService;
use crate::storage::Storage;

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Item identifier to export (repeatable)
    #[arg(short, long = "item")]
    pub items: Vec<String>,

    /// Item selection as JSON, e.g. '[{"name": "10001"}, "10002"]'
    #[arg(long = "items", conflicts_with = "items")]
    pub items_json: Option<String>,

    /// Resolve prices from this price list
    #[arg(short, long)]
    pub price_list: Option<String>,

    /// Output format: Excel (default) or CSV
    #[arg(short, long)]
    pub format: Option<String>,
}

impl ExportArgs {
    /// The selection in the form the export service takes
    fn selection(&self) -> ItemPlusResult<Option<Value>> {
        if let Some(text) = &self.items_json {
            let value: Value = serde_json::from_str(text).map_err(|e| {
                ItemPlusError::Validation(format!("Invalid --items JSON: {}", e))
            })?;
            return Ok(Some(value));
        }

        if self.items.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Value::from(self.items.clone())))
        }
    }
}

/// Handle the export command; returns whether a file was produced
///
/// Site data is loaded here rather than by the caller so that unreadable
/// data is reported like any other export failure.
pub fn handle_export_command(
    storage: &mut Storage,
    settings: &Settings,
    error_log: &ErrorLog,
    args: ExportArgs,
) -> ItemPlusResult<bool> {
    let selection = args.selection()?;
    let loaded = storage.load_all();
    let service = ExportService::from_storage(storage, settings, error_log);

    let outcome = match loaded {
        Ok(()) => service.export_items(
            selection.as_ref(),
            args.price_list.as_deref(),
            args.format.as_deref(),
        )?,
        Err(e) => service.fail(e)?,
    };

    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(!matches!(outcome, ExportOutcome::Error { .. }))
}
