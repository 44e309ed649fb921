//! Shared utilities for the contact cleaner crates: polars helpers and
//! row-level log redaction.

pub mod polars;
pub mod redact;

pub use self::polars::{column_names, column_values, keep_rows, string_column};
pub use redact::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data_enabled};
