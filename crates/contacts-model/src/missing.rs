//! The single missing-value convention shared by every cleaner and validator.
//!
//! A cell is missing when it is null, empty after trimming, or spelled
//! exactly like one of the spreadsheet NA markers (including the literal
//! `"nan"` that a stringified null turns into). Markers only count as the
//! whole cell text: `" NA "` is a value, `"NA"` is not.

/// Text form of a null cell after string coercion.
pub const MISSING_MARKER: &str = "nan";

/// Cell spellings that spreadsheet exports use for "no value".
///
/// The name cleaner can never produce one of these; the address and phone
/// cleaners treat a result that equals one as missing.
pub const NA_TOKENS: &[&str] = &[
    MISSING_MARKER,
    "NaN",
    "-NaN",
    "NA",
    "N/A",
    "n/a",
    "#N/A",
    "#NA",
    "<NA>",
    "NULL",
    "null",
    "-1.#IND",
    "-1.#QNAN",
    "1.#IND",
    "1.#QNAN",
];

/// Returns true when the cell carries no usable value.
pub fn is_missing(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(raw) => raw.trim().is_empty() || NA_TOKENS.contains(&raw),
    }
}

/// Returns the trimmed value, or `None` when it is missing.
pub fn present(value: Option<&str>) -> Option<&str> {
    if is_missing(value) {
        None
    } else {
        value.map(str::trim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_blank_are_missing() {
        assert!(is_missing(None));
        assert!(is_missing(Some("")));
        assert!(is_missing(Some("   ")));
    }

    #[test]
    fn marker_spellings_are_missing() {
        assert!(is_missing(Some("nan")));
        assert!(is_missing(Some("NaN")));
        assert!(is_missing(Some("N/A")));
        assert!(is_missing(Some("NULL")));
    }

    #[test]
    fn padded_markers_are_values() {
        assert!(!is_missing(Some(" NA ")));
        assert!(!is_missing(Some(" nan")));
        assert_eq!(present(Some(" NA ")), Some("NA"));
    }

    #[test]
    fn real_values_are_present() {
        assert!(!is_missing(Some("Nancy")));
        assert!(!is_missing(Some("nan@mail.org")));
        assert_eq!(present(Some("  ada  ")), Some("ada"));
        assert_eq!(present(Some("nan")), None);
    }
}
