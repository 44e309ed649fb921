//! Redaction is process-global, so it is exercised from a single test.

use contacts_common::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data_enabled};

#[test]
fn values_are_redacted_until_row_logging_is_enabled() {
    assert!(!log_data_enabled());
    assert_eq!(redact_value("ada@mail.org"), REDACTED_VALUE);

    set_log_data_enabled(true);
    assert_eq!(redact_value("ada@mail.org"), "ada@mail.org");

    set_log_data_enabled(false);
    assert_eq!(redact_value("ada@mail.org"), "[REDACTED]");
}
