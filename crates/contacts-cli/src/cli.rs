//! CLI argument definitions for the contact cleaner.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use contacts_model::{CleaningOptions, DEFAULT_ERROR_LOG};

#[derive(Parser)]
#[command(
    name = "contact-clean",
    version,
    about = "Clean contact list CSV exports",
    long_about = "Clean contact list CSV exports.\n\n\
                  Reconciles column names, normalizes fields, drops rows with invalid\n\
                  or duplicate emails and writes the surviving contacts to a new CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a contact list CSV.
    Clean(CleanArgs),

    /// List the recognized column header aliases.
    Aliases,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Contact list CSV to clean.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV (default: <INPUT stem>_email_only_<timestamp>.csv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Append failed runs to this file.
    #[arg(long = "error-log", value_name = "PATH", default_value = DEFAULT_ERROR_LOG)]
    pub error_log: PathBuf,

    /// Do not append failed runs to the error log.
    #[arg(long = "no-error-log")]
    pub no_error_log: bool,

    /// Log row-level diagnostics, including names and emails.
    #[arg(long = "debug")]
    pub debug: bool,

    /// Reserved. Rows are always filtered by email; `false` only warns.
    #[arg(
        long = "email-only",
        value_name = "BOOL",
        action = ArgAction::Set,
        default_value_t = true
    )]
    pub email_only: bool,

    /// Run every stage and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl CleanArgs {
    pub fn to_options(&self) -> CleaningOptions {
        CleaningOptions::new(&self.input)
            .with_output_file(self.output.clone())
            .with_error_log(&self.error_log)
            .with_log_errors(!self.no_error_log)
            .with_debug_mode(self.debug)
            .with_email_only(self.email_only)
            .with_dry_run(self.dry_run)
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
