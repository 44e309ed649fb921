//! The contact table threaded through the cleaning pipeline.

use contacts_common::{column_names, column_values, string_column};
use contacts_model::{CanonicalColumn, Contact};
use polars::prelude::{DataFrame, PolarsResult};

/// A contact list holding exactly the canonical columns, in output order.
///
/// Every pipeline stage consumes a frame and returns a new one; frames are
/// never mutated in place. Cells are text or null.
#[derive(Debug, Clone)]
pub struct ContactFrame {
    pub data: DataFrame,
}

impl ContactFrame {
    /// Build a frame from one value vector per canonical column.
    ///
    /// # Errors
    ///
    /// Returns an error if the vectors differ in length.
    pub fn from_columns(
        names: &[Option<String>],
        emails: &[Option<String>],
        phones: &[Option<String>],
        addresses: &[Option<String>],
    ) -> PolarsResult<Self> {
        let data = DataFrame::new(vec![
            string_column(CanonicalColumn::Name.as_str(), names),
            string_column(CanonicalColumn::Email.as_str(), emails),
            string_column(CanonicalColumn::Phone.as_str(), phones),
            string_column(CanonicalColumn::Address.as_str(), addresses),
        ])?;
        Ok(Self { data })
    }

    /// Build a frame from typed contacts; every cell is present.
    pub fn from_contacts(contacts: &[Contact]) -> PolarsResult<Self> {
        let column = |field: CanonicalColumn| -> Vec<Option<String>> {
            contacts
                .iter()
                .map(|contact| Some(contact.field(field).to_string()))
                .collect()
        };
        Self::from_columns(
            &column(CanonicalColumn::Name),
            &column(CanonicalColumn::Email),
            &column(CanonicalColumn::Phone),
            &column(CanonicalColumn::Address),
        )
    }

    /// Returns the number of records in the frame.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    /// Values of one canonical column, nulls as `None`.
    pub fn values(&self, column: CanonicalColumn) -> PolarsResult<Vec<Option<String>>> {
        column_values(&self.data, column.as_str())
    }

    /// Column names in frame order.
    pub fn column_names(&self) -> Vec<String> {
        column_names(&self.data)
    }

    /// Rows as typed contacts. Null cells become empty strings.
    pub fn contacts(&self) -> PolarsResult<Vec<Contact>> {
        let names = self.values(CanonicalColumn::Name)?;
        let emails = self.values(CanonicalColumn::Email)?;
        let phones = self.values(CanonicalColumn::Phone)?;
        let addresses = self.values(CanonicalColumn::Address)?;
        let contacts = names
            .into_iter()
            .zip(emails)
            .zip(phones)
            .zip(addresses)
            .map(|(((name, email), phone), address)| Contact {
                name: name.unwrap_or_default(),
                email: email.unwrap_or_default(),
                phone: phone.unwrap_or_default(),
                address: address.unwrap_or_default(),
            })
            .collect();
        Ok(contacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_contacts_in_canonical_order() {
        let contacts = vec![
            Contact::new("Ada Lovelace", "ada@mail.org", "555", "1 Main St"),
            Contact::new("Bob", "bob@mail.org", "", "2 Side St"),
        ];
        let frame = ContactFrame::from_contacts(&contacts).expect("frame");
        assert_eq!(frame.record_count(), 2);
        assert_eq!(frame.column_names(), vec!["name", "email", "phone", "address"]);
        assert_eq!(frame.contacts().expect("contacts"), contacts);
    }

    #[test]
    fn null_cells_read_back_as_empty() {
        let frame = ContactFrame::from_columns(
            &[Some("Ada".to_string())],
            &[None],
            &[None],
            &[Some("1 Main St".to_string())],
        )
        .expect("frame");
        assert_eq!(frame.values(CanonicalColumn::Email).expect("email"), vec![None]);
        assert_eq!(frame.contacts().expect("contacts")[0].email, "");
    }
}
