//! Simple stderr backend for the [`log`] crate.
//!
//! The interactive display is never used for diagnostics, because it may not exist yet or may already be torn
//! down when an error is reported.

use std::io::Write;

use log::{Metadata, Record};

/// A simple logging backend writing to standard error.
#[derive(Default)]
pub struct StderrLogger;

impl StderrLogger {
    /// Constructs a new [`StderrLogger`].
    #[must_use = "Has no effect if the result is unused"]
    pub const fn new() -> Self {
        Self
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let level = record.level();
            let file = record.file().unwrap_or_default();
            let line = record.line().unwrap_or_default();
            let args = record.args();
            let _ = writeln!(std::io::stderr().lock(), "[{level} {file}:{line}] - {args}");
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
