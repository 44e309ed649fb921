use contacts_ingest::IngestError;
use contacts_output::OutputError;
use contacts_transform::TransformError;
use contacts_validate::ValidateError;
use thiserror::Error;

/// Any failure of a cleaning run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Validate(#[from] ValidateError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for PipelineError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

impl PipelineError {
    /// True when the input file does not exist.
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, Self::Ingest(IngestError::FileNotFound { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn wrapped_errors_keep_their_message() {
        let err: PipelineError = IngestError::FileNotFound {
            path: PathBuf::from("leads.csv"),
        }
        .into();
        assert!(err.is_file_not_found());
        assert_eq!(err.to_string(), "Input file not found: leads.csv");
    }
}
