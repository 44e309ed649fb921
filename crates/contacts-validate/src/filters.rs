//! Row filters.
//!
//! Each filter looks at a [`ContactFrame`] and returns a keep-mask: one
//! boolean per row, `true` to keep. Filters never modify values.

use std::collections::BTreeSet;

use contacts_common::redact_value;
use contacts_model::{CanonicalColumn, RemovalNote, is_missing};
use contacts_transform::ContactFrame;
use tracing::debug;

use crate::email::{EmailRules, EmailVerdict};
use crate::error::Result;

/// A single stage of the filter chain.
///
/// # Implementing a Filter
///
/// ```ignore
/// struct NoPhoneFilter;
///
/// impl RowFilter for NoPhoneFilter {
///     fn name(&self) -> &'static str {
///         "phone"
///     }
///
///     fn keep_mask(&self, frame: &ContactFrame) -> Result<Vec<bool>> {
///         let phones = frame.values(CanonicalColumn::Phone)?;
///         Ok(phones.iter().map(|p| !is_missing(p.as_deref())).collect())
///     }
///
///     fn removal_note(&self, removed: usize) -> RemovalNote {
///         RemovalNote::new(removed, format!("Removed {removed} rows without phone"))
///     }
/// }
/// ```
pub trait RowFilter: Send + Sync {
    /// Short identifier used in logs and stage reports.
    fn name(&self) -> &'static str;

    /// Returns one entry per row of `frame`; `true` keeps the row.
    ///
    /// # Errors
    ///
    /// Returns an error if a column the filter reads is absent.
    fn keep_mask(&self, frame: &ContactFrame) -> Result<Vec<bool>>;

    /// Note describing `removed` dropped rows.
    fn removal_note(&self, removed: usize) -> RemovalNote;
}

/// Keeps rows whose email passes [`EmailRules`].
#[derive(Debug, Clone, Default)]
pub struct ValidEmailFilter {
    rules: EmailRules,
}

impl ValidEmailFilter {
    pub fn new(rules: EmailRules) -> Self {
        Self { rules }
    }
}

impl RowFilter for ValidEmailFilter {
    fn name(&self) -> &'static str {
        "email"
    }

    fn keep_mask(&self, frame: &ContactFrame) -> Result<Vec<bool>> {
        let emails = frame.values(CanonicalColumn::Email)?;
        let mut keep = Vec::with_capacity(emails.len());
        for email in &emails {
            let verdict = self.rules.check(email.as_deref());
            match &verdict {
                EmailVerdict::Malformed => {
                    debug!(
                        email = redact_value(email.as_deref().unwrap_or_default()),
                        "email does not match pattern"
                    );
                }
                EmailVerdict::Blocked(term) => {
                    debug!(
                        email = redact_value(email.as_deref().unwrap_or_default()),
                        term = %term,
                        "email contains blocked term"
                    );
                }
                EmailVerdict::Valid | EmailVerdict::Missing => {}
            }
            keep.push(verdict.is_valid());
        }
        debug!(
            valid = keep.iter().filter(|kept| **kept).count(),
            total = keep.len(),
            "email validation"
        );
        Ok(keep)
    }

    fn removal_note(&self, removed: usize) -> RemovalNote {
        RemovalNote::new(
            removed,
            format!("Removed {removed} rows with invalid/missing email"),
        )
    }
}

/// Keeps rows where one column is non-empty after trimming.
#[derive(Debug, Clone, Copy)]
pub struct NonEmptyFilter {
    column: CanonicalColumn,
}

impl NonEmptyFilter {
    pub fn new(column: CanonicalColumn) -> Self {
        Self { column }
    }
}

impl RowFilter for NonEmptyFilter {
    fn name(&self) -> &'static str {
        self.column.as_str()
    }

    fn keep_mask(&self, frame: &ContactFrame) -> Result<Vec<bool>> {
        let values = frame.values(self.column)?;
        let keep: Vec<bool> = values
            .iter()
            .map(|value| !is_missing(value.as_deref()))
            .collect();
        debug!(
            column = %self.column,
            empty = keep.iter().filter(|kept| !**kept).count(),
            "empty values"
        );
        Ok(keep)
    }

    fn removal_note(&self, removed: usize) -> RemovalNote {
        RemovalNote::new(
            removed,
            format!("Removed {removed} rows with empty {}", self.column),
        )
    }
}

/// Keeps the first occurrence of each distinct email.
///
/// Emails are compared exactly; they are already lower-cased and trimmed
/// by the time the chain runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateEmailFilter;

impl RowFilter for DuplicateEmailFilter {
    fn name(&self) -> &'static str {
        "duplicate_email"
    }

    fn keep_mask(&self, frame: &ContactFrame) -> Result<Vec<bool>> {
        let emails = frame.values(CanonicalColumn::Email)?;
        let mut seen = BTreeSet::new();
        let keep: Vec<bool> = emails.into_iter().map(|email| seen.insert(email)).collect();
        debug!(
            duplicates = keep.iter().filter(|kept| !**kept).count(),
            "duplicate emails"
        );
        Ok(keep)
    }

    fn removal_note(&self, removed: usize) -> RemovalNote {
        RemovalNote::new(removed, format!("Removed {removed} duplicate email entries"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(rows: &[(&str, &str, &str)]) -> ContactFrame {
        let names: Vec<Option<String>> = rows.iter().map(|row| Some(row.0.to_string())).collect();
        let emails: Vec<Option<String>> = rows.iter().map(|row| Some(row.1.to_string())).collect();
        let addresses: Vec<Option<String>> =
            rows.iter().map(|row| Some(row.2.to_string())).collect();
        let phones = vec![None; rows.len()];
        ContactFrame::from_columns(&names, &emails, &phones, &addresses).expect("frame")
    }

    #[test]
    fn email_filter_masks_invalid_rows() {
        let frame = frame(&[
            ("Ada", "ada@mail.org", "1 Main St"),
            ("Joe", "joe@test.com", "2 Main St"),
            ("Bob", "", "3 Main St"),
            ("Eve", "eve@mail", "4 Main St"),
        ]);
        let mask = ValidEmailFilter::default().keep_mask(&frame).expect("mask");
        assert_eq!(mask, vec![true, false, false, false]);
    }

    #[test]
    fn non_empty_filter_treats_missing_markers_as_empty() {
        let frame = frame(&[
            ("Ada", "ada@mail.org", "1 Main St"),
            ("", "bob@mail.org", "2 Main St"),
            ("   ", "cy@mail.org", "3 Main St"),
            ("nan", "di@mail.org", "4 Main St"),
        ]);
        let mask = NonEmptyFilter::new(CanonicalColumn::Name)
            .keep_mask(&frame)
            .expect("mask");
        assert_eq!(mask, vec![true, false, false, false]);
    }

    #[test]
    fn duplicate_filter_keeps_first_occurrence() {
        let frame = frame(&[
            ("Jane", "jane@x.com", "1 Main St"),
            ("Ada", "ada@x.com", "2 Main St"),
            ("Jane Again", "jane@x.com", "3 Main St"),
        ]);
        let mask = DuplicateEmailFilter.keep_mask(&frame).expect("mask");
        assert_eq!(mask, vec![true, true, false]);
    }

    #[test]
    fn notes_name_the_reason() {
        assert_eq!(
            NonEmptyFilter::new(CanonicalColumn::Address)
                .removal_note(2)
                .reason,
            "Removed 2 rows with empty address"
        );
        assert_eq!(
            DuplicateEmailFilter.removal_note(1).to_string(),
            "Removed 1 duplicate email entries"
        );
    }
}
