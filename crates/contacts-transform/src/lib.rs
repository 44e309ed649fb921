//! Contact list transformation.
//!
//! - **aliases**: header alias table mapping spreadsheet spellings to
//!   canonical columns
//! - **columns**: column reconciliation (normalize headers, resolve
//!   aliases, synthesize `name`, keep the four canonical columns)
//! - **frame**: the [`ContactFrame`] table threaded through the pipeline
//! - **normalization**: per-field cleaners

pub mod aliases;
pub mod columns;
pub mod error;
pub mod frame;
pub mod normalization;

pub use aliases::{ColumnAliases, DEFAULT_COLUMN_ALIASES};
pub use columns::{normalize_header, reconcile_columns};
pub use error::{Result, TransformError};
pub use frame::ContactFrame;
pub use normalization::{
    capitalize_word, clean_address, clean_contact_frame, clean_email, clean_name, clean_phone,
};
