//! CLI library components for the contact list cleaner.

pub mod error;
pub mod logging;
pub mod pipeline;
