//! Status messages on stderr.
//!
//! stdout carries the report tables and prompts, so everything chatty goes
//! through [`Logger`] to stderr where `--quiet` can silence it.

use std::fmt::Display;

/// Verbosity-aware stderr writer.
///
/// `verbose` is the `-v` count; `quiet` suppresses everything except errors.
#[derive(Clone, Copy, Debug, Default)]
pub struct Logger {
    verbose: u8,
    quiet: bool,
}

impl Logger {
    pub fn new(verbose: u8, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Normal progress and status lines.
    pub fn info(&self, message: impl Display) {
        if self.enabled(0) {
            eprintln!("{message}");
        }
    }

    /// Detail shown only with at least `level` `-v` flags.
    pub fn verbose(&self, level: u8, message: impl Display) {
        if self.enabled(level) {
            eprintln!("{message}");
        }
    }

    pub fn warn(&self, message: impl Display) {
        if self.enabled(0) {
            eprintln!("Warning: {message}");
        }
    }

    /// Per-item failures. Printed even in quiet mode.
    pub fn error(&self, message: impl Display) {
        eprintln!("Error: {message}");
    }

    fn enabled(&self, level: u8) -> bool {
        !self.quiet && self.verbose >= level
    }
}
