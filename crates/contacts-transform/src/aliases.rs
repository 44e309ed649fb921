//! Header aliases for contact spreadsheets.
//!
//! Exports from CRMs, scrapers and hand-edited sheets spell the same field
//! many ways. The alias table maps a normalized header (trimmed, lower-case)
//! to the canonical column it stands for.

use std::collections::BTreeMap;

use contacts_model::CanonicalColumn;

/// Built-in header aliases, keyed by normalized header.
pub const DEFAULT_COLUMN_ALIASES: &[(&str, CanonicalColumn)] = &[
    // Typo variants
    ("emial", CanonicalColumn::Email),
    ("e-mail", CanonicalColumn::Email),
    ("emai;", CanonicalColumn::Email),
    // Alternate names
    ("mobile", CanonicalColumn::Phone),
    ("phone number", CanonicalColumn::Phone),
    ("cell", CanonicalColumn::Phone),
    ("full name", CanonicalColumn::Name),
    ("contact name", CanonicalColumn::Name),
    // Scraped directories put the business name in the link column
    ("links", CanonicalColumn::Name),
    ("link", CanonicalColumn::Name),
    ("full address", CanonicalColumn::Address),
    ("location", CanonicalColumn::Address),
];

/// Lookup table from normalized header to canonical column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAliases {
    aliases: BTreeMap<String, CanonicalColumn>,
}

impl Default for ColumnAliases {
    fn default() -> Self {
        let aliases = DEFAULT_COLUMN_ALIASES
            .iter()
            .map(|(alias, column)| ((*alias).to_string(), *column))
            .collect();
        Self { aliases }
    }
}

impl ColumnAliases {
    /// An alias table with no entries; only canonical names resolve.
    pub fn empty() -> Self {
        Self {
            aliases: BTreeMap::new(),
        }
    }

    /// Adds an alias. The alias is normalized the same way headers are.
    #[must_use]
    pub fn with_alias(mut self, alias: &str, column: CanonicalColumn) -> Self {
        self.aliases.insert(alias.trim().to_lowercase(), column);
        self
    }

    /// Canonical column for a normalized header, if any.
    pub fn get(&self, normalized: &str) -> Option<CanonicalColumn> {
        CanonicalColumn::from_normalized(normalized)
            .or_else(|| self.aliases.get(normalized).copied())
    }

    /// Name a normalized header resolves to: the canonical column name for
    /// known headers, the header itself otherwise.
    pub fn resolve<'a>(&self, normalized: &'a str) -> &'a str {
        match self.get(normalized) {
            Some(column) => column.as_str(),
            None => normalized,
        }
    }

    /// Aliases in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, CanonicalColumn)> {
        self.aliases
            .iter()
            .map(|(alias, column)| (alias.as_str(), *column))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_typos_and_alternate_names() {
        let aliases = ColumnAliases::default();
        assert_eq!(aliases.resolve("e-mail"), "email");
        assert_eq!(aliases.resolve("emai;"), "email");
        assert_eq!(aliases.resolve("mobile"), "phone");
        assert_eq!(aliases.resolve("phone number"), "phone");
        assert_eq!(aliases.resolve("link"), "name");
        assert_eq!(aliases.resolve("location"), "address");
    }

    #[test]
    fn canonical_and_unknown_names_resolve_to_themselves() {
        let aliases = ColumnAliases::default();
        assert_eq!(aliases.resolve("name"), "name");
        assert_eq!(aliases.resolve("first_name"), "first_name");
        assert_eq!(aliases.get("company"), None);
    }

    #[test]
    fn custom_aliases_are_normalized() {
        let aliases = ColumnAliases::empty().with_alias("  Telefon ", CanonicalColumn::Phone);
        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases.resolve("telefon"), "phone");
        assert_eq!(aliases.resolve("mobile"), "mobile");
    }

    #[test]
    fn default_table_has_every_builtin_alias() {
        let aliases = ColumnAliases::default();
        assert_eq!(aliases.len(), DEFAULT_COLUMN_ALIASES.len());
        assert!(!aliases.is_empty());
    }
}
