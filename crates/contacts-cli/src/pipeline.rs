//! The cleaning run: ingest, reconcile, clean, filter, write.
//!
//! [`clean_file`] is the single error boundary. Every failure after the
//! input-existence check is logged (and appended to the error log when
//! enabled) before it is returned.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use contacts_common::{column_names, redact_value};
use contacts_ingest::{IngestError, read_contacts_csv};
use contacts_model::{CanonicalColumn, CleaningOptions, RemovalNote};
use contacts_output::{
    append_error_log, default_output_path, fallback_output_path, write_with_fallback,
};
use contacts_transform::{ColumnAliases, ContactFrame, clean_contact_frame, reconcile_columns};
use contacts_validate::{EmailRules, FilterChain, StageReport};
use tracing::{debug, error, info, info_span, warn};

use crate::error::PipelineError;

/// Raw emails listed in the debug sample taken before cleaning.
const EMAIL_SAMPLE_SIZE: usize = 10;

/// Outcome of a successful cleaning run.
#[derive(Debug, Clone)]
pub struct CleanResult {
    pub input: PathBuf,
    /// Path written, `None` on a dry run.
    pub output: Option<PathBuf>,
    pub original_count: usize,
    pub final_count: usize,
    pub notes: Vec<RemovalNote>,
    pub stages: Vec<StageReport>,
}

impl CleanResult {
    pub fn removed_count(&self) -> usize {
        self.original_count.saturating_sub(self.final_count)
    }

    /// Share of input rows removed, in percent. `0.0` for an empty input.
    #[allow(clippy::cast_precision_loss)]
    pub fn removed_percent(&self) -> f64 {
        if self.original_count == 0 {
            return 0.0;
        }
        self.removed_count() as f64 / self.original_count as f64 * 100.0
    }
}

/// Runs a full cleaning pass over `options.input_file`.
///
/// # Errors
///
/// Returns [`PipelineError`] for any failure. A missing input file fails
/// before anything is logged or written.
pub fn clean_file(options: &CleaningOptions) -> Result<CleanResult, PipelineError> {
    let started = Local::now();
    let input = options.input_file.as_path();
    if !input.exists() {
        return Err(IngestError::FileNotFound {
            path: input.to_path_buf(),
        }
        .into());
    }

    let span = info_span!("clean", input = %input.display());
    let _guard = span.enter();

    run_stages(options, &started).inspect_err(|err| {
        error!(error = %err, "cleaning failed");
        if options.log_errors {
            record_failure(&options.error_log, input, err);
        }
    })
}

fn record_failure(log_path: &Path, input: &Path, err: &PipelineError) {
    if let Err(log_err) = append_error_log(log_path, &Local::now(), input, &err.to_string()) {
        warn!(
            path = %log_path.display(),
            error = %log_err,
            "could not append to error log"
        );
    }
}

fn run_stages(
    options: &CleaningOptions,
    started: &DateTime<Local>,
) -> Result<CleanResult, PipelineError> {
    let input = options.input_file.as_path();

    let raw = read_contacts_csv(input)?;
    let original_count = raw.height();
    info!(columns = ?column_names(&raw), "columns found");

    let reconciled = reconcile_columns(&raw, &ColumnAliases::default())?;
    if options.debug_mode {
        log_email_sample(&reconciled)?;
    }
    let cleaned = clean_contact_frame(&reconciled)?;

    if !options.email_only {
        warn!("email_only is reserved; rows are still filtered by email");
    }

    let outcome = FilterChain::standard(EmailRules::default())
        .with_diagnostics(options.debug_mode)
        .apply(cleaned)?;
    if options.debug_mode {
        log_final_preview(&outcome.frame)?;
    }

    let output = if options.dry_run {
        info!("dry run, output not written");
        None
    } else {
        let primary = options
            .output_file
            .clone()
            .unwrap_or_else(|| default_output_path(input, started));
        let fallback = fallback_output_path(started);
        Some(write_with_fallback(&outcome.frame.data, &primary, &fallback)?)
    };

    let final_count = outcome.frame.record_count();
    info!(
        original = original_count,
        kept = final_count,
        removed = original_count - final_count,
        "cleaning complete"
    );

    Ok(CleanResult {
        input: input.to_path_buf(),
        output,
        original_count,
        final_count,
        notes: outcome.notes,
        stages: outcome.stages,
    })
}

fn log_email_sample(frame: &ContactFrame) -> Result<(), PipelineError> {
    let emails = frame.values(CanonicalColumn::Email)?;
    for (row, email) in emails.iter().take(EMAIL_SAMPLE_SIZE).enumerate() {
        debug!(
            row,
            email = redact_value(email.as_deref().unwrap_or_default()),
            "email sample"
        );
    }
    Ok(())
}

fn log_final_preview(frame: &ContactFrame) -> Result<(), PipelineError> {
    for (row, contact) in frame.contacts()?.iter().enumerate() {
        debug!(
            row,
            name = redact_value(&contact.name),
            email = redact_value(&contact.email),
            "kept row"
        );
    }
    Ok(())
}
