//! The ordered filter chain.

use contacts_common::{keep_rows, redact_value};
use contacts_model::{CanonicalColumn, RemovalNote};
use contacts_transform::ContactFrame;
use tracing::{debug, info};

use crate::email::EmailRules;
use crate::error::{Result, ValidateError};
use crate::filters::{DuplicateEmailFilter, NonEmptyFilter, RowFilter, ValidEmailFilter};

/// Dropped rows listed individually under diagnostics before summarizing.
const DROPPED_PREVIEW_LIMIT: usize = 5;

/// What one filter did to the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub filter: &'static str,
    pub before: usize,
    pub removed: usize,
}

/// Result of running the chain.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub frame: ContactFrame,
    /// One note per stage that removed at least one row, in stage order.
    pub notes: Vec<RemovalNote>,
    /// One report per stage, including stages that removed nothing.
    pub stages: Vec<StageReport>,
}

impl FilterOutcome {
    pub fn removed(&self) -> usize {
        self.stages.iter().map(|stage| stage.removed).sum()
    }
}

/// Filters applied strictly in insertion order.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn RowFilter>>,
    diagnostics: bool,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Valid email, non-empty name, non-empty address, unique email.
    pub fn standard(rules: EmailRules) -> Self {
        Self::new()
            .with_filter(ValidEmailFilter::new(rules))
            .with_filter(NonEmptyFilter::new(CanonicalColumn::Name))
            .with_filter(NonEmptyFilter::new(CanonicalColumn::Address))
            .with_filter(DuplicateEmailFilter)
    }

    #[must_use]
    pub fn with_filter(mut self, filter: impl RowFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Log the rows each stage drops. Results are unaffected.
    #[must_use]
    pub fn with_diagnostics(mut self, enable: bool) -> Self {
        self.diagnostics = enable;
        self
    }

    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Runs every filter in order.
    ///
    /// # Errors
    ///
    /// Returns an error if a filter cannot read its column or produces a
    /// mask of the wrong length.
    pub fn apply(&self, frame: ContactFrame) -> Result<FilterOutcome> {
        let mut frame = frame;
        let mut notes = Vec::new();
        let mut stages = Vec::with_capacity(self.filters.len());

        for filter in &self.filters {
            let before = frame.record_count();
            let keep = filter.keep_mask(&frame)?;
            if keep.len() != before {
                return Err(ValidateError::MaskLength {
                    filter: filter.name(),
                    expected: before,
                    actual: keep.len(),
                });
            }
            let removed = keep.iter().filter(|kept| !**kept).count();
            if removed > 0 {
                if self.diagnostics {
                    log_dropped_rows(filter.name(), &frame, &keep)?;
                }
                frame = ContactFrame {
                    data: keep_rows(&frame.data, &keep)?,
                };
                notes.push(filter.removal_note(removed));
            }
            info!(
                filter = filter.name(),
                before,
                removed,
                remaining = frame.record_count(),
                "filter applied"
            );
            stages.push(StageReport {
                filter: filter.name(),
                before,
                removed,
            });
        }

        Ok(FilterOutcome {
            frame,
            notes,
            stages,
        })
    }
}

fn log_dropped_rows(filter: &'static str, frame: &ContactFrame, keep: &[bool]) -> Result<()> {
    let names = frame.values(CanonicalColumn::Name)?;
    let emails = frame.values(CanonicalColumn::Email)?;
    let dropped: Vec<usize> = keep
        .iter()
        .enumerate()
        .filter(|(_, kept)| !**kept)
        .map(|(idx, _)| idx)
        .collect();
    for &idx in dropped.iter().take(DROPPED_PREVIEW_LIMIT) {
        debug!(
            filter,
            row = idx,
            name = redact_value(names[idx].as_deref().unwrap_or_default()),
            email = redact_value(emails[idx].as_deref().unwrap_or_default()),
            "dropped row"
        );
    }
    if dropped.len() > DROPPED_PREVIEW_LIMIT {
        debug!(
            filter,
            "... and {} more",
            dropped.len() - DROPPED_PREVIEW_LIMIT
        );
    }
    Ok(())
}
