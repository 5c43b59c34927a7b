//! Public files area
//!
//! Files written here are downloadable at `/files/<name>`.

use std::path::PathBuf;

use crate::error::ItemPlusError;
use crate::models::FileDescriptor;

use super::file_io::write_bytes_atomic;

/// URL prefix under which public files are served
pub const PUBLIC_FILES_URL: &str = "/files";

/// Writes files into the site's public files root
#[derive(Debug, Clone)]
pub struct PublicFiles {
    root: PathBuf,
}

impl PublicFiles {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Filesystem path of a public file
    pub fn path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    /// Site-relative URL of a public file
    pub fn url(&self, file_name: &str) -> String {
        format!("{}/{}", PUBLIC_FILES_URL, file_name)
    }

    /// Write (or replace) a public file
    pub fn write(&self, file_name: &str, bytes: &[u8]) -> Result<FileDescriptor, ItemPlusError> {
        write_bytes_atomic(self.path(file_name), bytes)?;
        Ok(FileDescriptor {
            file_url: self.url(file_name),
            file_name: file_name.to_string(),
        })
    }
}
