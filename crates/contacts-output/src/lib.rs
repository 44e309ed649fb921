//! Output for cleaned contact lists.
//!
//! Writes the surviving rows as CSV (with a one-shot fallback path when the
//! destination is not writable) and appends failed runs to the error log.

pub mod error;
pub mod error_log;
pub mod paths;
pub mod writer;

pub use error::{OutputError, Result};
pub use error_log::{ERROR_LOG_TIMESTAMP_FORMAT, append_error_log, error_log_line};
pub use paths::{FILE_TIMESTAMP_FORMAT, default_output_path, fallback_output_path};
pub use writer::{write_contacts_csv, write_with_fallback};
