//! CSV export writer
//!
//! Output starts with a UTF-8 byte-order mark so spreadsheet tools pick the
//! right encoding. Fields containing delimiters, quotes or newlines are quoted.

use crate::error::{ItemPlusError, ItemPlusResult};
use crate::models::{ExportFormat, FileDescriptor};
use crate::storage::PublicFiles;

use super::TableWriter;

/// UTF-8 byte-order mark
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes `itemplus.csv` into the public files area
pub struct CsvWriter<'a> {
    files: &'a PublicFiles,
}

impl<'a> CsvWriter<'a> {
    pub fn new(files: &'a PublicFiles) -> Self {
        Self { files }
    }

    /// Render the CSV document, BOM included
    pub fn render(headers: &[&str], rows: &[Vec<String>]) -> ItemPlusResult<Vec<u8>> {
        let mut writer = ::csv::WriterBuilder::new()
            .terminator(::csv::Terminator::Any(b'\n'))
            .from_writer(UTF8_BOM.to_vec());

        writer.write_record(headers)?;
        for row in rows {
            writer.write_record(row)?;
        }

        writer
            .into_inner()
            .map_err(|e| ItemPlusError::Export(format!("Failed to finish CSV: {}", e)))
    }
}

impl TableWriter for CsvWriter<'_> {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn write(&self, headers: &[&str], rows: &[Vec<String>]) -> ItemPlusResult<FileDescriptor> {
        let bytes = Self::render(headers, rows)?;
        self.files.write(ExportFormat::Csv.file_name(), &bytes)
    }
}
