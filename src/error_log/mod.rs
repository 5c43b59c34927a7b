//! Persistent error log for ItemPlus
//!
//! Failures that are reported to callers as structured results (rather than
//! propagated) are recorded here so they can be inspected later.
//!
//! The log is an append-only, line-delimited JSON file (`error.log` in the
//! site directory). Each line is one `ErrorLogEntry`.
//!
//! # Example
//!
//! ```rust,ignore
//! use itemplus::error_log::{ErrorLog, ErrorLogEntry};
//!
//! let log = ErrorLog::new(paths.error_log());
//! log.log(&ErrorLogEntry::new("Item Export Failed", "disk full"))?;
//! ```

mod entry;
mod logger;

pub use entry::ErrorLogEntry;
pub use logger::ErrorLog;
