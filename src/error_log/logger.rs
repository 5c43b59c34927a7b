//! Append-only writer and reader for the error log

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{ItemPlusError, ItemPlusResult};

use super::entry::ErrorLogEntry;

/// Handles writing entries to the error log file
pub struct ErrorLog {
    log_path: PathBuf,
}

impl ErrorLog {
    /// Create a new ErrorLog that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry and flush it
    pub fn log(&self, entry: &ErrorLogEntry) -> ItemPlusResult<()> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ItemPlusError::Io(format!("Failed to create error log directory: {}", e))
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| ItemPlusError::Io(format!("Failed to open error log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| ItemPlusError::Json(format!("Failed to serialize error entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| ItemPlusError::Io(format!("Failed to write error entry: {}", e)))?;

        file.flush()
            .map_err(|e| ItemPlusError::Io(format!("Failed to flush error log: {}", e)))?;

        Ok(())
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> ItemPlusResult<Vec<ErrorLogEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| ItemPlusError::Io(format!("Failed to open error log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                ItemPlusError::Io(format!("Failed to read error log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: ErrorLogEntry = serde_json::from_str(&line).map_err(|e| {
                ItemPlusError::Json(format!(
                    "Failed to parse error entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// The most recent `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> ItemPlusResult<Vec<ErrorLogEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        Ok(entries.split_off(skip))
    }
}
