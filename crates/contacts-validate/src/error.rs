use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    #[error("filter {filter} produced a mask of {actual} rows for a frame of {expected}")]
    MaskLength {
        filter: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl From<polars::prelude::PolarsError> for ValidateError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidateError>;
