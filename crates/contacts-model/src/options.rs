//! Configuration options for a cleaning run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Error log written in the working directory when a run fails.
pub const DEFAULT_ERROR_LOG: &str = "data_cleaning_errors.log";

/// Options controlling a single cleaning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningOptions {
    /// Contact list to clean.
    pub input_file: PathBuf,

    /// Destination CSV. When `None` a timestamped name is derived from the
    /// input file name.
    pub output_file: Option<PathBuf>,

    /// Append a line to the error log when the run fails.
    pub log_errors: bool,

    /// Path of the append-only error log.
    pub error_log: PathBuf,

    /// Emit row-level diagnostics. Never changes which rows are kept.
    pub debug_mode: bool,

    /// Reserved toggle. Rows are always filtered by email validity.
    pub email_only: bool,

    /// Run every stage and report, but do not write the output file.
    pub dry_run: bool,
}

impl CleaningOptions {
    pub fn new(input_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            output_file: None,
            log_errors: true,
            error_log: PathBuf::from(DEFAULT_ERROR_LOG),
            debug_mode: false,
            email_only: true,
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_output_file(mut self, path: Option<PathBuf>) -> Self {
        self.output_file = path;
        self
    }

    #[must_use]
    pub fn with_log_errors(mut self, enable: bool) -> Self {
        self.log_errors = enable;
        self
    }

    #[must_use]
    pub fn with_error_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.error_log = path.into();
        self
    }

    #[must_use]
    pub fn with_debug_mode(mut self, enable: bool) -> Self {
        self.debug_mode = enable;
        self
    }

    #[must_use]
    pub fn with_email_only(mut self, enable: bool) -> Self {
        self.email_only = enable;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, enable: bool) -> Self {
        self.dry_run = enable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_behavior() {
        let options = CleaningOptions::new("in.csv");
        assert_eq!(options.input_file, PathBuf::from("in.csv"));
        assert!(options.output_file.is_none());
        assert!(options.log_errors);
        assert_eq!(options.error_log, PathBuf::from("data_cleaning_errors.log"));
        assert!(!options.debug_mode);
        assert!(options.email_only);
        assert!(!options.dry_run);
    }
}
