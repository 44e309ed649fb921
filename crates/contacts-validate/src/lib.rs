//! Contact validation.
//!
//! Syntactic email validation plus the ordered chain of row filters that
//! decides which contacts survive a cleaning run. Each filter removes rows
//! and reports how many it removed and why.

pub mod chain;
pub mod email;
pub mod error;
pub mod filters;

pub use chain::{FilterChain, FilterOutcome, StageReport};
pub use email::{BLOCKED_EMAIL_TERMS, EmailRules, EmailVerdict};
pub use error::{Result, ValidateError};
pub use filters::{DuplicateEmailFilter, NonEmptyFilter, RowFilter, ValidEmailFilter};
