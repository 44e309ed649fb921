//! Polars helpers for string-typed contact frames.
//!
//! Contact frames hold every column as text. These helpers move values
//! between polars columns and plain `Option<String>` vectors, and filter
//! frames with boolean keep-masks.

use polars::prelude::{
    BooleanChunked, Column, DataFrame, IntoColumn, NamedFrom, NewChunkedArray, PolarsResult,
    Series,
};

/// Column names of a frame in source order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names_owned()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

/// Reads every value of a text column, keeping nulls as `None`.
///
/// # Errors
///
/// Returns an error if the column does not exist or is not a string column.
pub fn column_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let values = df.column(name)?.str()?;
    Ok(values
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

/// Builds a string column from optional values.
pub fn string_column(name: &str, values: &[Option<String>]) -> Column {
    Series::new(name.into(), values).into_column()
}

/// Keeps the rows whose mask entry is `true`, preserving order.
///
/// # Errors
///
/// Returns an error if the mask length differs from the frame height.
pub fn keep_rows(df: &DataFrame, keep: &[bool]) -> PolarsResult<DataFrame> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    df.filter(&mask)
}
