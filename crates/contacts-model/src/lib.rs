//! Shared model types for the contact list cleaner.

pub mod contact;
pub mod missing;
pub mod notes;
pub mod options;

pub use contact::{CanonicalColumn, Contact};
pub use missing::{MISSING_MARKER, NA_TOKENS, is_missing, present};
pub use notes::RemovalNote;
pub use options::{CleaningOptions, DEFAULT_ERROR_LOG};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_notes_render_their_reason() {
        let notes = [
            RemovalNote::new(2, "Removed 2 rows with empty name"),
            RemovalNote::new(1, "Removed 1 duplicate email entries"),
        ];
        let rendered: Vec<String> = notes.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "Removed 2 rows with empty name",
                "Removed 1 duplicate email entries"
            ]
        );
        assert_eq!(notes.iter().map(|note| note.count).sum::<usize>(), 3);
    }

    #[test]
    fn options_serialize() {
        let options = CleaningOptions::new("contacts.csv")
            .with_output_file(Some("clean.csv".into()))
            .with_debug_mode(true);
        let json = serde_json::to_string(&options).expect("serialize options");
        let round: CleaningOptions = serde_json::from_str(&json).expect("deserialize options");
        assert_eq!(round, options);
    }
}
