//! Error log entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single error log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorLogEntry {
    /// When the error was recorded (UTC)
    pub timestamp: DateTime<Utc>,

    /// Short title of the failing operation, e.g. "Item Export Failed"
    pub title: String,

    /// Error message
    pub message: String,
}

impl ErrorLogEntry {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            title: title.into(),
            message: message.into(),
        }
    }

    /// One-line human-readable form
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.title,
            self.message
        )
    }
}
