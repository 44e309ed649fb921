//! CSV loading for contact lists.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::info;

use crate::error::{IngestError, Result};

/// Reads a contact list CSV into a string-typed `DataFrame`.
///
/// The first line is the header. All columns are read as text and empty
/// cells become nulls. Rows are kept in file order.
///
/// # Errors
///
/// Returns [`IngestError::FileNotFound`] when `path` does not exist,
/// [`IngestError::EmptyCsv`] for a zero-byte file, and
/// [`IngestError::CsvParse`] when polars rejects the contents.
pub fn read_contacts_csv(path: &Path) -> Result<DataFrame> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    if metadata.len() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    // A zero-row schema inference makes polars type every column as String.
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded contacts"
    );
    Ok(df)
}
