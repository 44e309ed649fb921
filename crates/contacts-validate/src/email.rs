//! Syntactic email validation.
//!
//! No DNS or SMTP lookups: an address is valid when it has the shape
//! `local@domain.tld` and does not contain a blocked term.

use std::sync::LazyLock;

use contacts_model::is_missing;
use regex::Regex;

/// Local part, `@`, dotted domain, alphabetic TLD of two or more letters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Invalid email regex")
});

/// Substrings that mark placeholder or social-media addresses.
///
/// Matching is a raw substring test, so `contest@mail.org` is rejected too.
pub const BLOCKED_EMAIL_TERMS: &[&str] = &["whatsapp", "messenger", "facebook", "test", "example"];

/// Why an email was accepted or rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailVerdict {
    Valid,
    Missing,
    /// Contains the given blocked term.
    Blocked(String),
    /// Does not match the address pattern.
    Malformed,
}

impl EmailVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Email acceptance rules: the address pattern plus a blocked-term list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRules {
    blocked_terms: Vec<String>,
}

impl Default for EmailRules {
    fn default() -> Self {
        Self::new(BLOCKED_EMAIL_TERMS.iter().copied())
    }
}

impl EmailRules {
    /// Rules with the given blocked terms (matched case-insensitively).
    pub fn new<I, S>(blocked_terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            blocked_terms: blocked_terms
                .into_iter()
                .map(|term| term.as_ref().to_lowercase())
                .collect(),
        }
    }

    #[must_use]
    pub fn with_blocked_term(mut self, term: &str) -> Self {
        self.blocked_terms.push(term.to_lowercase());
        self
    }

    pub fn blocked_terms(&self) -> &[String] {
        &self.blocked_terms
    }

    /// Classifies an email cell.
    pub fn check(&self, value: Option<&str>) -> EmailVerdict {
        if is_missing(value) {
            return EmailVerdict::Missing;
        }
        let email = value.unwrap_or_default().trim().to_lowercase();
        if let Some(term) = self
            .blocked_terms
            .iter()
            .find(|term| email.contains(term.as_str()))
        {
            return EmailVerdict::Blocked(term.clone());
        }
        if EMAIL_PATTERN.is_match(&email) {
            EmailVerdict::Valid
        } else {
            EmailVerdict::Malformed
        }
    }

    pub fn is_valid(&self, value: Option<&str>) -> bool {
        self.check(value).is_valid()
    }
}
