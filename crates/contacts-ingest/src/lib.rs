//! Contact list ingestion.
//!
//! Loads a comma-separated contact list into a polars `DataFrame`. Every
//! column is read as text so phone numbers and postal codes keep their
//! original spelling; empty cells become nulls.

pub mod error;
pub mod reader;

pub use error::{IngestError, Result};
pub use reader::read_contacts_csv;
