//! Column reconciliation.
//!
//! Turns whatever header row a spreadsheet arrived with into the four
//! canonical columns:
//!
//! 1. Each header is trimmed and lower-cased.
//! 2. Known aliases are resolved (`E-Mail` becomes `email`).
//! 3. A missing `name` is synthesized from `first_name` and `last_name`.
//! 4. Any canonical column still absent fails the run.
//! 5. Only `name, email, phone, address` are kept, in that order.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use contacts_common::{column_names, column_values};
use contacts_model::{CanonicalColumn, is_missing};
use polars::prelude::DataFrame;
use tracing::{info, warn};

use crate::aliases::ColumnAliases;
use crate::error::{Result, TransformError};
use crate::frame::ContactFrame;

const FIRST_NAME: &str = "first_name";
const LAST_NAME: &str = "last_name";

/// Normalizes a raw header for alias lookup: trimmed and lower-cased.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_lowercase()
}

/// Reconciles source columns into a [`ContactFrame`].
///
/// When two source headers resolve to the same name, the left-most one
/// wins.
///
/// # Errors
///
/// Returns [`TransformError::MissingColumns`] naming every canonical column
/// that could not be resolved.
pub fn reconcile_columns(df: &DataFrame, aliases: &ColumnAliases) -> Result<ContactFrame> {
    // resolved name -> original header
    let mut resolved: BTreeMap<String, String> = BTreeMap::new();
    for original in column_names(df) {
        let normalized = normalize_header(&original);
        let name = aliases.resolve(&normalized).to_string();
        match resolved.entry(name) {
            Entry::Vacant(slot) => {
                slot.insert(original);
            }
            Entry::Occupied(existing) => {
                warn!(
                    column = %original,
                    resolved = %existing.key(),
                    kept = %existing.get(),
                    "ignoring duplicate column"
                );
            }
        }
    }

    let mut values: BTreeMap<CanonicalColumn, Vec<Option<String>>> = BTreeMap::new();
    let mut missing = Vec::new();
    for column in CanonicalColumn::ALL {
        if let Some(source) = resolved.get(column.as_str()) {
            values.insert(column, column_values(df, source)?);
        } else if column == CanonicalColumn::Name {
            match synthesize_name(df, &resolved)? {
                Some(names) => {
                    info!("synthesized name from first_name and last_name");
                    values.insert(column, names);
                }
                None => missing.push(column),
            }
        } else {
            missing.push(column);
        }
    }
    if !missing.is_empty() {
        return Err(TransformError::MissingColumns { columns: missing });
    }

    let mut take = |column: CanonicalColumn| values.remove(&column).unwrap_or_default();
    let names = take(CanonicalColumn::Name);
    let emails = take(CanonicalColumn::Email);
    let phones = take(CanonicalColumn::Phone);
    let addresses = take(CanonicalColumn::Address);
    let frame = ContactFrame::from_columns(&names, &emails, &phones, &addresses)?;
    info!(
        rows = frame.record_count(),
        source_columns = df.width(),
        "columns reconciled"
    );
    Ok(frame)
}

/// `first_name + " " + last_name`, or `None` when either column is absent.
/// A row missing either part gets a null name.
fn synthesize_name(
    df: &DataFrame,
    resolved: &BTreeMap<String, String>,
) -> Result<Option<Vec<Option<String>>>> {
    let (Some(first_col), Some(last_col)) = (resolved.get(FIRST_NAME), resolved.get(LAST_NAME))
    else {
        return Ok(None);
    };
    let firsts = column_values(df, first_col)?;
    let lasts = column_values(df, last_col)?;
    let names = firsts
        .into_iter()
        .zip(lasts)
        .map(|(first, last)| match (first, last) {
            (Some(first), Some(last))
                if !is_missing(Some(first.as_str())) && !is_missing(Some(last.as_str())) =>
            {
                Some(format!("{first} {last}"))
            }
            _ => None,
        })
        .collect();
    Ok(Some(names))
}
