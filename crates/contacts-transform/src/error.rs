//! Error types for contact transformation.

use contacts_model::CanonicalColumn;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// Required columns are still absent after alias resolution.
    #[error("missing required columns: {}", format_column_list(.columns))]
    MissingColumns { columns: Vec<CanonicalColumn> },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;

/// Renders `['phone', 'address']`.
fn format_column_list(columns: &[CanonicalColumn]) -> String {
    let quoted: Vec<String> = columns
        .iter()
        .map(|column| format!("'{}'", column.as_str()))
        .collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_lists_every_column() {
        let err = TransformError::MissingColumns {
            columns: vec![CanonicalColumn::Phone, CanonicalColumn::Address],
        };
        assert_eq!(
            err.to_string(),
            "missing required columns: ['phone', 'address']"
        );
    }
}
