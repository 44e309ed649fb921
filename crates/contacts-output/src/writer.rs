//! CSV writing.

use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::{info, warn};

use crate::error::{OutputError, Result};

/// Writes `df` as CSV with a header row and no index column.
///
/// The CSV is encoded in memory first, so a failed encode leaves no file
/// behind. Nulls are written as empty cells and fields are quoted only when
/// they need to be.
///
/// # Errors
///
/// Returns [`OutputError::PermissionDenied`] when the file cannot be
/// created for lack of rights, and other variants for any other failure.
pub fn write_contacts_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let mut data = df.clone();
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .finish(&mut data)?;
    fs::write(path, buffer).map_err(|err| OutputError::from_io(path, err))?;
    info!(
        path = %path.display(),
        rows = df.height(),
        "wrote output"
    );
    Ok(())
}

/// Writes to `primary`, retrying once at `fallback` on permission denied.
///
/// Returns the path actually written.
///
/// # Errors
///
/// Any failure other than permission denied on `primary` is returned as
/// is, as is any failure writing `fallback`.
pub fn write_with_fallback(df: &DataFrame, primary: &Path, fallback: &Path) -> Result<PathBuf> {
    retry_on_permission_denied(primary, fallback, |path| write_contacts_csv(df, path))
}

fn retry_on_permission_denied<F>(primary: &Path, fallback: &Path, mut write: F) -> Result<PathBuf>
where
    F: FnMut(&Path) -> Result<()>,
{
    match write(primary) {
        Ok(()) => Ok(primary.to_path_buf()),
        Err(err) if err.is_permission_denied() => {
            warn!(
                path = %primary.display(),
                fallback = %fallback.display(),
                "permission denied, writing fallback output"
            );
            write(fallback)?;
            Ok(fallback.to_path_buf())
        }
        Err(err) => Err(err),
    }
}
