use std::fmt;

/// How many rows a filter stage removed, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalNote {
    pub count: usize,
    /// Full human-readable sentence, e.g. "Removed 3 rows with empty name".
    pub reason: String,
}

impl RemovalNote {
    pub fn new(count: usize, reason: impl Into<String>) -> Self {
        Self {
            count,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RemovalNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}
