//! Per-field cleaners.
//!
//! Cleaners never drop rows. Every field is trimmed; `email` is lower-cased,
//! `name` is whitespace-collapsed and capitalized per word, `address` gets
//! whitespace and comma spacing normalized. Missing values follow
//! [`contacts_model::is_missing`].

use std::sync::LazyLock;

use contacts_model::{CanonicalColumn, is_missing, present};
use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::frame::ContactFrame;

/// A comma with any surrounding whitespace, plus any further commas.
static COMMA_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,[\s,]*").expect("Invalid comma regex"));

/// Trims and lower-cases an email. Missing values are returned trimmed but
/// otherwise untouched.
pub fn clean_email(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if is_missing(Some(trimmed)) {
        Some(trimmed.to_string())
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Collapses whitespace and capitalizes each word. Missing becomes `""`.
///
/// Only the first character of a word is upper-cased, so `o'brien` becomes
/// `O'brien` and `mary-jane` becomes `Mary-jane`.
pub fn clean_name(value: Option<&str>) -> String {
    let Some(name) = present(value) else {
        return String::new();
    };
    name.split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// First character upper-case, the rest lower-case.
pub fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut capitalized: String = first.to_uppercase().collect();
    capitalized.push_str(&chars.as_str().to_lowercase());
    capitalized
}

/// Collapses whitespace and normalizes commas to `", "`. Missing becomes `""`,
/// as does a result that reads as a missing marker.
///
/// A comma is never preceded by whitespace and is followed by exactly one
/// space unless it ends the address; runs of commas collapse into one.
pub fn clean_address(value: Option<&str>) -> String {
    let Some(address) = present(value) else {
        return String::new();
    };
    let collapsed = address.split_whitespace().collect::<Vec<_>>().join(" ");
    let cleaned = COMMA_RUN.replace_all(&collapsed, ", ");
    let cleaned = cleaned.trim_end();
    if is_missing(Some(cleaned)) {
        String::new()
    } else {
        cleaned.to_string()
    }
}

/// Trims a phone number. Missing phones, including ones that trim down to a
/// missing marker, are written as empty cells.
pub fn clean_phone(value: Option<&str>) -> Option<String> {
    present(value)
        .filter(|phone| !is_missing(Some(*phone)))
        .map(str::to_string)
}

/// Applies every field cleaner to every row.
///
/// # Errors
///
/// Returns an error if the frame is missing a canonical column.
pub fn clean_contact_frame(frame: &ContactFrame) -> Result<ContactFrame> {
    let names: Vec<Option<String>> = frame
        .values(CanonicalColumn::Name)?
        .iter()
        .map(|value| Some(clean_name(value.as_deref())))
        .collect();
    let emails: Vec<Option<String>> = frame
        .values(CanonicalColumn::Email)?
        .iter()
        .map(|value| clean_email(value.as_deref()))
        .collect();
    let phones: Vec<Option<String>> = frame
        .values(CanonicalColumn::Phone)?
        .iter()
        .map(|value| clean_phone(value.as_deref()))
        .collect();
    let addresses: Vec<Option<String>> = frame
        .values(CanonicalColumn::Address)?
        .iter()
        .map(|value| Some(clean_address(value.as_deref())))
        .collect();

    let cleaned = ContactFrame::from_columns(&names, &emails, &phones, &addresses)?;
    debug!(rows = cleaned.record_count(), "fields cleaned");
    Ok(cleaned)
}
