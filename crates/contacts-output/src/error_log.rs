//! Append-only error log for failed runs.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, TimeZone};

use crate::error::{OutputError, Result};

/// Timestamp at the start of every error log line, microsecond precision.
pub const ERROR_LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Formats one error log line, including the trailing newline.
pub fn error_log_line<Tz>(timestamp: &DateTime<Tz>, input: &Path, message: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}: Error processing {}: {message}\n",
        timestamp.format(ERROR_LOG_TIMESTAMP_FORMAT),
        input.display()
    )
}

/// Appends a line to the error log, creating it if absent.
///
/// The file is opened and closed for each entry.
///
/// # Errors
///
/// Returns an error if the log cannot be opened or written.
pub fn append_error_log<Tz>(
    log_path: &Path,
    timestamp: &DateTime<Tz>,
    input: &Path,
    message: &str,
) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let line = error_log_line(timestamp, input, message);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|err| OutputError::from_io(log_path, err))?;
    file.write_all(line.as_bytes())
        .map_err(|err| OutputError::from_io(log_path, err))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn line_format_has_microseconds() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|date| date.and_hms_micro_opt(14, 5, 7, 42))
            .expect("valid timestamp")
            .and_utc();
        let line = error_log_line(&timestamp, Path::new("leads.csv"), "boom");
        assert_eq!(
            line,
            "2024-03-09 14:05:07.000042: Error processing leads.csv: boom\n"
        );
    }

    #[test]
    fn appends_without_truncating() {
        let dir = tempfile::tempdir().expect("tempdir");
        let log = dir.path().join("errors.log");
        let timestamp = Utc::now();
        append_error_log(&log, &timestamp, Path::new("a.csv"), "first").expect("append");
        append_error_log(&log, &timestamp, Path::new("b.csv"), "second").expect("append");

        let contents = std::fs::read_to_string(&log).expect("read log");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Error processing a.csv: first"));
        assert!(lines[1].ends_with("Error processing b.csv: second"));
    }
}
