//! Log output of failed normalization.
//!
//! Kept in its own test binary: the logger is process-global.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use nice_styles::{normalize, StyleTree};
use serde_json::json;

struct Capture {
    messages: Mutex<Vec<String>>,
}

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    messages: Mutex::new(Vec::new()),
};

#[test]
fn nested_failure_is_logged_once() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let input: StyleTree = serde_json::from_value(json!({
        "@media print": { "&:hover": { "& span": { "foo": true } } }
    }))
    .unwrap();
    let err = normalize(&input).unwrap_err();
    assert_eq!(err.key(), "foo");

    let messages = CAPTURE.messages.lock().unwrap();
    let failures: Vec<_> = messages
        .iter()
        .filter(|m| m.contains("invalid"))
        .collect();
    assert_eq!(failures.len(), 1, "{:?}", failures);
    assert!(failures[0].contains("foo"));
}
