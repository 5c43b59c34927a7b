//! Export writers for ItemPlus
//!
//! Two interchangeable strategies share one contract: take the header and the
//! row cells, persist a file in the public files area and hand back where it
//! went.
//! - CSV: UTF-8 with a byte-order mark, standard quoting
//! - Excel: single-sheet workbook with a styled header (feature `xlsx`)

pub mod csv;
#[cfg(feature = "xlsx")]
pub mod xlsx;

pub use self::csv::CsvWriter;
#[cfg(feature = "xlsx")]
pub use self::xlsx::ExcelWriter;

use crate::config::Settings;
use crate::error::ItemPlusResult;
use crate::models::{ExportFormat, FileDescriptor};
use crate::storage::PublicFiles;

/// A format-specific table writer
pub trait TableWriter {
    /// Format this writer produces
    fn format(&self) -> ExportFormat;

    /// Write the header and rows, replacing any previous export of this format
    fn write(&self, headers: &[&str], rows: &[Vec<String>]) -> ItemPlusResult<FileDescriptor>;
}

/// Pick the writer for a format
///
/// Fails with a configuration error when spreadsheet output was compiled out.
pub fn writer_for<'a>(
    format: ExportFormat,
    settings: &Settings,
    files: &'a PublicFiles,
) -> ItemPlusResult<Box<dyn TableWriter + 'a>> {
    match format {
        ExportFormat::Csv => Ok(Box::new(CsvWriter::new(files))),
        ExportFormat::Excel => excel_writer(settings, files),
    }
}

#[cfg(feature = "xlsx")]
fn excel_writer<'a>(
    settings: &Settings,
    files: &'a PublicFiles,
) -> ItemPlusResult<Box<dyn TableWriter + 'a>> {
    Ok(Box::new(ExcelWriter::new(
        files,
        settings.column_width,
        settings.header_fill_rgb()?,
    )))
}

#[cfg(not(feature = "xlsx"))]
fn excel_writer<'a>(
    _settings: &Settings,
    _files: &'a PublicFiles,
) -> ItemPlusResult<Box<dyn TableWriter + 'a>> {
    Err(crate::error::ItemPlusError::Config(
        "Excel export is unavailable: built without the `xlsx` feature".into(),
    ))
}
