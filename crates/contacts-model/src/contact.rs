//! Contact records and the canonical output columns.

use std::fmt;

/// One of the four columns every cleaned contact list carries.
///
/// The declaration order is the output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CanonicalColumn {
    Name,
    Email,
    Phone,
    Address,
}

impl CanonicalColumn {
    /// All canonical columns in output order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Phone, Self::Address];

    /// Lower-case column name as written to the output header.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
        }
    }

    /// Parse an already-normalized (trimmed, lower-case) column name.
    pub fn from_normalized(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.as_str() == name)
    }
}

impl fmt::Display for CanonicalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single cleaned contact.
///
/// Identity for deduplication is the normalized `email`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// Value of the given canonical field.
    pub fn field(&self, column: CanonicalColumn) -> &str {
        match column {
            CanonicalColumn::Name => &self.name,
            CanonicalColumn::Email => &self.email,
            CanonicalColumn::Phone => &self.phone,
            CanonicalColumn::Address => &self.address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_is_output_order() {
        let names: Vec<&str> = CanonicalColumn::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["name", "email", "phone", "address"]);
    }

    #[test]
    fn parses_normalized_names_only() {
        assert_eq!(
            CanonicalColumn::from_normalized("email"),
            Some(CanonicalColumn::Email)
        );
        assert_eq!(CanonicalColumn::from_normalized("Email"), None);
        assert_eq!(CanonicalColumn::from_normalized("mobile"), None);
    }

    #[test]
    fn field_access_matches_column() {
        let contact = Contact::new("Ada", "ada@mail.org", "555", "1 Main St");
        assert_eq!(contact.field(CanonicalColumn::Email), "ada@mail.org");
        assert_eq!(contact.field(CanonicalColumn::Address), "1 Main St");
    }
}
