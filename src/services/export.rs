//! Item export service
//!
//! Selection, price enrichment, row assembly and file output for the weight
//! item export. Callers always get an `ExportOutcome` back; the only error
//! that escapes is a configuration error (e.g. spreadsheet output compiled
//! out), which the operator has to fix.

use serde_json::Value;
use tracing::{error, info, warn};

use crate::config::Settings;
use crate::error::{ItemPlusError, ItemPlusResult};
use crate::error_log::{ErrorLog, ErrorLogEntry};
use crate::export::writer_for;
use crate::models::{ExportFormat, ExportOutcome, ExportRow, Item, EXPORT_HEADERS};
use crate::storage::{ItemRepository, PublicFiles, Storage};

use super::pricing::resolve_price;
use super::selection::{parse_item_refs, select_weight_items};

/// Message returned when there is nothing to export
pub const NO_WEIGHT_ITEMS: &str = "No weight items found to export.";

/// Title used for error log entries of failed exports
pub const EXPORT_FAILED: &str = "Item Export Failed";

/// Service for exporting weight items
pub struct ExportService<'a, R: ItemRepository + ?Sized> {
    repo: &'a R,
    files: &'a PublicFiles,
    settings: &'a Settings,
    error_log: &'a ErrorLog,
}

impl<'a> ExportService<'a, Storage> {
    /// Create an export service reading from site storage
    pub fn from_storage(storage: &'a Storage, settings: &'a Settings, error_log: &'a ErrorLog) -> Self {
        Self::new(storage, &storage.public_files, settings, error_log)
    }
}

impl<'a, R: ItemRepository + ?Sized> ExportService<'a, R> {
    pub fn new(
        repo: &'a R,
        files: &'a PublicFiles,
        settings: &'a Settings,
        error_log: &'a ErrorLog,
    ) -> Self {
        Self {
            repo,
            files,
            settings,
            error_log,
        }
    }

    /// Export weight items
    ///
    /// `items` is the caller's selection (see `parse_item_refs`), `price_list`
    /// switches price resolution to that list, and `file_format` picks the
    /// writer ("Excel" or "CSV"; anything else uses the configured default).
    pub fn export_items(
        &self,
        items: Option<&Value>,
        price_list: Option<&str>,
        file_format: Option<&str>,
    ) -> ItemPlusResult<ExportOutcome> {
        let format = self.resolve_format(file_format);

        match self.try_export(items, price_list, format) {
            Ok(outcome) => Ok(outcome),
            Err(e) => self.fail(e),
        }
    }

    /// Report an export failure that happened outside `export_items`, such
    /// as site data that could not be loaded. Configuration errors are
    /// returned as-is; anything else is logged and becomes an `{error}`
    /// outcome.
    pub fn fail(&self, e: ItemPlusError) -> ItemPlusResult<ExportOutcome> {
        if e.is_config() {
            return Err(e);
        }

        error!(error = %e, "Item export failed");
        if let Err(log_err) = self
            .error_log
            .log(&ErrorLogEntry::new(EXPORT_FAILED, e.to_string()))
        {
            warn!(error = %log_err, "Could not record export failure in error log");
        }
        Ok(ExportOutcome::error(format!("{}: {}", EXPORT_FAILED, e)))
    }

    /// Build the rows for a set of items without writing anything
    pub fn build_rows(&self, items: &[Item], price_list: Option<&str>) -> Vec<ExportRow> {
        items
            .iter()
            .map(|item| {
                let price = resolve_price(self.repo, item, price_list);
                ExportRow::from_item(item, &self.settings.barcode_type, &self.settings.db_code, price)
            })
            .collect()
    }

    fn resolve_format(&self, file_format: Option<&str>) -> ExportFormat {
        match file_format.map(str::trim).filter(|f| !f.is_empty()) {
            None => self.settings.default_format,
            Some(selector) => ExportFormat::parse(selector).unwrap_or_else(|| {
                warn!(format = selector, "Unknown export format, using default");
                self.settings.default_format
            }),
        }
    }

    fn try_export(
        &self,
        items: Option<&Value>,
        price_list: Option<&str>,
        format: ExportFormat,
    ) -> ItemPlusResult<ExportOutcome> {
        let requested = items.map(parse_item_refs).unwrap_or_default();
        let selected = select_weight_items(self.repo, &requested)?;

        if selected.is_empty() {
            return Ok(ExportOutcome::error(NO_WEIGHT_ITEMS));
        }

        // Resolve the writer first so a missing capability fails before any lookups
        let writer = writer_for(format, self.settings, self.files)?;

        let rows: Vec<Vec<String>> = self
            .build_rows(&selected, price_list)
            .iter()
            .map(ExportRow::to_record)
            .collect();

        let descriptor = writer.write(&EXPORT_HEADERS, &rows)?;
        info!(
            items = rows.len(),
            format = %format,
            file = %descriptor.file_name,
            "Exported weight items"
        );

        Ok(ExportOutcome::File(descriptor))
    }
}
