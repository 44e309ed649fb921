//! Integration tests for contact list loading.

use std::io::Write;

use contacts_common::{column_names, column_values};
use contacts_ingest::read_contacts_csv;
use tempfile::NamedTempFile;

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{content}").expect("write csv");
    file
}

#[test]
fn reads_every_column_as_text() {
    let file = create_temp_csv("Name,Mobile,Zip\nAda,0123,00501\nBob,555,10001\n");
    let df = read_contacts_csv(file.path()).expect("read csv");

    assert_eq!(df.height(), 2);
    assert_eq!(column_names(&df), vec!["Name", "Mobile", "Zip"]);
    assert_eq!(
        column_values(&df, "Mobile").expect("mobile"),
        vec![Some("0123".to_string()), Some("555".to_string())]
    );
    assert_eq!(
        column_values(&df, "Zip").expect("zip"),
        vec![Some("00501".to_string()), Some("10001".to_string())]
    );
}

#[test]
fn keeps_whitespace_and_turns_empty_cells_into_nulls() {
    let file = create_temp_csv("name,email\n  joe smith ,JOE@MAIL.ORG\nann,\n");
    let df = read_contacts_csv(file.path()).expect("read csv");

    assert_eq!(
        column_values(&df, "name").expect("name"),
        vec![Some("  joe smith ".to_string()), Some("ann".to_string())]
    );
    assert_eq!(
        column_values(&df, "email").expect("email"),
        vec![Some("JOE@MAIL.ORG".to_string()), None]
    );
}

#[test]
fn reads_quoted_fields_with_commas() {
    let file = create_temp_csv("name,address\nAda,\"1 Main St , Springfield\"\n");
    let df = read_contacts_csv(file.path()).expect("read csv");

    assert_eq!(
        column_values(&df, "address").expect("address"),
        vec![Some("1 Main St , Springfield".to_string())]
    );
}
