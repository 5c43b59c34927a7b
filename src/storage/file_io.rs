//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't leave half-written data behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;

use crate::error::ItemPlusError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, ItemPlusError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| ItemPlusError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| ItemPlusError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ItemPlusError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let bytes = serde_json::to_vec_pretty(data)
        .map_err(|e| ItemPlusError::Storage(format!("Failed to serialize data: {}", e)))?;
    write_bytes_atomic(path, &bytes)
}

/// Write raw bytes to a file atomically
///
/// Each call writes to its own temp file next to the target so the final
/// rename stays on one filesystem. Readers see either the previous file or a
/// complete new one; concurrent writers each succeed and the last rename wins.
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), ItemPlusError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(parent).map_err(|e| {
        ItemPlusError::Storage(format!(
            "Failed to create directory {}: {}",
            parent.display(),
            e
        ))
    })?;

    let temp = NamedTempFile::new_in(parent)
        .map_err(|e| ItemPlusError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(temp);
    writer
        .write_all(bytes)
        .map_err(|e| ItemPlusError::Storage(format!("Failed to write data: {}", e)))?;

    let temp = writer
        .into_inner()
        .map_err(|e| ItemPlusError::Storage(format!("Failed to flush data: {}", e)))?;

    temp.as_file()
        .sync_all()
        .map_err(|e| ItemPlusError::Storage(format!("Failed to sync data: {}", e)))?;

    // Dropping the error's temp file removes it
    temp.persist(path)
        .map_err(|e| ItemPlusError::Storage(format!("Failed to rename temp file: {}", e.error)))?;

    Ok(())
}
