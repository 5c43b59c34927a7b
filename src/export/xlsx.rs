//! Excel export writer
//!
//! One worksheet named "Items": a bold header on a colored fill, plain data
//! rows, every column at the same width.

use rust_xlsxwriter::{Color, Format, Workbook};

use crate::error::ItemPlusResult;
use crate::models::{ExportFormat, FileDescriptor};
use crate::storage::PublicFiles;

use super::TableWriter;

pub const SHEET_NAME: &str = "Items";

/// Writes `itemplus.xlsx` into the public files area
pub struct ExcelWriter<'a> {
    files: &'a PublicFiles,
    column_width: f64,
    header_fill: u32,
}

impl<'a> ExcelWriter<'a> {
    pub fn new(files: &'a PublicFiles, column_width: f64, header_fill: u32) -> Self {
        Self {
            files,
            column_width,
            header_fill,
        }
    }

    /// Build the workbook in memory
    pub fn render(&self, headers: &[&str], rows: &[Vec<String>]) -> ItemPlusResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header_format = Format::new()
            .set_bold()
            .set_background_color(Color::RGB(self.header_fill));

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, header) in headers.iter().enumerate() {
            let col = col as u16;
            worksheet.write_string_with_format(0, col, *header, &header_format)?;
            worksheet.set_column_width(col, self.column_width)?;
        }

        for (row_idx, row) in rows.iter().enumerate() {
            let row_num = (row_idx + 1) as u32;
            for (col, value) in row.iter().enumerate() {
                worksheet.write_string(row_num, col as u16, value.as_str())?;
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}

impl TableWriter for ExcelWriter<'_> {
    fn format(&self) -> ExportFormat {
        ExportFormat::Excel
    }

    fn write(&self, headers: &[&str], rows: &[Vec<String>]) -> ItemPlusResult<FileDescriptor> {
        let bytes = self.render(headers, rows)?;
        self.files.write(ExportFormat::Excel.file_name(), &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EXPORT_HEADERS;
    use calamine::{Reader, Xlsx};
    use std::io::Cursor;
    use tempfile::TempDir;

    /// Sheet names and the cell text of the "Items" sheet
    fn read_back(bytes: Vec<u8>) -> (Vec<String>, Vec<Vec<String>>) {
        let mut workbook = Xlsx::new(Cursor::new(bytes)).unwrap();
        let names = workbook.sheet_names();
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        let cells = range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        (names, cells)
    }

    fn apples_row() -> Vec<String> {
        ["10001", "Apples", "A1", "1", "14", "EAN13", "1", "2.99"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_write_produces_items_sheet() {
        let temp_dir = TempDir::new().unwrap();
        let files = PublicFiles::new(temp_dir.path().to_path_buf());
        let writer = ExcelWriter::new(&files, 20.0, 0xD9E1F2);

        let rows = vec![apples_row()];
        let descriptor = writer.write(&EXPORT_HEADERS, &rows).unwrap();

        assert_eq!(descriptor.file_name, "itemplus.xlsx");
        assert_eq!(descriptor.file_url, "/files/itemplus.xlsx");

        let bytes = std::fs::read(files.path("itemplus.xlsx")).unwrap();
        let (names, cells) = read_back(bytes);

        assert_eq!(names, vec!["Items".to_string()]);
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0], EXPORT_HEADERS.map(String::from).to_vec());
        assert_eq!(cells[1], apples_row());
    }

    #[test]
    fn test_values_are_written_as_text() {
        let temp_dir = TempDir::new().unwrap();
        let files = PublicFiles::new(temp_dir.path().to_path_buf());
        let writer = ExcelWriter::new(&files, 20.0, 0xD9E1F2);

        // Leading zeros and blank cells survive as written
        let mut row = apples_row();
        row[0] = "00042".into();
        row[4] = String::new();
        row[7] = String::new();

        let bytes = writer.render(&EXPORT_HEADERS, &[row]).unwrap();
        let (_, cells) = read_back(bytes);

        assert_eq!(cells[1][0], "00042");
        assert_eq!(cells[1][1], "Apples");
        assert_eq!(cells[1][4], "");
    }

    #[test]
    fn test_render_header_only() {
        let temp_dir = TempDir::new().unwrap();
        let files = PublicFiles::new(temp_dir.path().to_path_buf());
        let writer = ExcelWriter::new(&files, 12.5, 0x000000);

        let bytes = writer.render(&EXPORT_HEADERS, &[]).unwrap();
        let (names, cells) = read_back(bytes);

        assert_eq!(names, vec!["Items".to_string()]);
        assert_eq!(cells, vec![EXPORT_HEADERS.map(String::from).to_vec()]);
    }
}
