//! Observers for the worker pools.
//!
//! The coordinators decide *when* to notify; the observers decide *what* to do
//! with a notification. [`Logger`] prints to stderr, [`Silent`] drops
//! everything.

use std::io;
use std::path::Path;

use crate::logging::Logger;

/// Receives coarse progress from the scan coordinator.
pub trait ScanProgress: Sync {
    /// Called once before any work is dispatched.
    fn started(&self, total: usize);

    /// Called with the number of completed units so far.
    fn advanced(&self, done: usize, total: usize);

    /// Called once after the last worker has exited.
    fn finished(&self, total: usize);
}

/// Receives per-path events from a real deletion run.
///
/// Events arrive from worker threads in completion order. A dry run emits
/// none; its plan is part of the report on stdout, see
/// [`crate::report::write_dry_run_plan`].
pub trait DeletionEvents: Sync {
    fn deleting(&self, path: &Path);
    fn deleted(&self, path: &Path);
    fn failed(&self, path: &Path, error: &io::Error);
}

/// Observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl ScanProgress for Silent {
    fn started(&self, _total: usize) {}
    fn advanced(&self, _done: usize, _total: usize) {}
    fn finished(&self, _total: usize) {}
}

impl DeletionEvents for Silent {
    fn deleting(&self, _path: &Path) {}
    fn deleted(&self, _path: &Path) {}
    fn failed(&self, _path: &Path, _error: &io::Error) {}
}

impl ScanProgress for Logger {
    fn started(&self, total: usize) {
        self.info(format!("Processing {total} directories..."));
    }

    fn advanced(&self, done: usize, total: usize) {
        self.info(format!("Progress: {done}/{total} directories processed"));
    }

    fn finished(&self, total: usize) {
        self.info(format!("All {total} directories processed"));
    }
}

impl DeletionEvents for Logger {
    fn deleting(&self, path: &Path) {
        self.verbose(1, format!("Deleting: {}", path.display()));
    }

    fn deleted(&self, path: &Path) {
        self.info(format!("Deleted: {}", path.display()));
    }

    fn failed(&self, path: &Path, error: &io::Error) {
        self.error(format!("deleting {}: {error}", path.display()));
    }
}
