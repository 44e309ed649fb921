//! Output file naming.

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

/// Timestamp embedded in generated file names.
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// `{stem}_email_only_{timestamp}.csv` in the working directory.
///
/// Only the file stem of `input` is used, so the output never lands next
/// to the input unless the working directory is the input's directory.
pub fn default_output_path<Tz>(input: &Path, started: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let stem = input
        .file_stem()
        .map_or_else(|| "contacts".into(), |stem| stem.to_string_lossy());
    PathBuf::from(format!(
        "{stem}_email_only_{}.csv",
        started.format(FILE_TIMESTAMP_FORMAT)
    ))
}

/// Destination used once when the primary output is not writable.
pub fn fallback_output_path<Tz>(started: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    PathBuf::from(format!(
        "email_only_data_{}.csv",
        started.format(FILE_TIMESTAMP_FORMAT)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn started() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn default_path_uses_input_stem() {
        let path = default_output_path(Path::new("/data/exports/leads.csv"), &started());
        assert_eq!(path, PathBuf::from("leads_email_only_20240309_140507.csv"));
    }

    #[test]
    fn default_path_without_extension() {
        let path = default_output_path(Path::new("contacts"), &started());
        assert_eq!(path, PathBuf::from("contacts_email_only_20240309_140507.csv"));
    }

    #[test]
    fn fallback_path() {
        assert_eq!(
            fallback_output_path(&started()),
            PathBuf::from("email_only_data_20240309_140507.csv")
        );
    }
}
