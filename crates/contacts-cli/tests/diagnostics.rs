//! Debug diagnostics emitted during a cleaning run.
//!
//! Row-level logging is process-wide, so these tests live in their own
//! test binary.

use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use contacts_cli::pipeline::clean_file;
use contacts_common::set_log_data_enabled;
use contacts_model::CleaningOptions;
use tracing::Level;

#[derive(Clone, Default)]
struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        let buffer = self.buffer.lock().expect("log buffer");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

struct CapturedWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut buffer = self
            .buffer
            .lock()
            .map_err(|_| io::Error::other("log buffer poisoned"))?;
        buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn email_sample_shows_values_before_cleaning() {
    set_log_data_enabled(true);
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("leads.csv");
    fs::write(
        &input,
        "name,email,phone,address\nJoe,JOE@MAIL.ORG,1,1 Main St\n",
    )
    .expect("write input");
    let options = CleaningOptions::new(&input)
        .with_output_file(Some(dir.path().join("clean.csv")))
        .with_error_log(dir.path().join("errors.log"))
        .with_debug_mode(true);

    let logs = CapturedLogs::default();
    let writer_logs = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || CapturedWriter {
            buffer: Arc::clone(&writer_logs.buffer),
        })
        .finish();
    tracing::subscriber::with_default(subscriber, || clean_file(&options)).expect("clean");

    let contents = logs.contents();
    let sample: Vec<&str> = contents
        .lines()
        .filter(|line| line.contains("email sample"))
        .collect();
    assert_eq!(sample.len(), 1, "{contents}");
    assert!(sample[0].contains("JOE@MAIL.ORG"), "{}", sample[0]);
}
