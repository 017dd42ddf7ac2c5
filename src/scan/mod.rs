//! Measuring matched directories.
//!
//! [`measure_directory`] walks a single match once and produces its
//! [`ScanResult`]; [`Scanner`] fans a whole batch of matches out over a
//! fixed-size rayon pool.
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use modsweep::progress::Silent;
//! use modsweep::scan::Scanner;
//!
//! let matches = vec![PathBuf::from("/work/app/node_modules")];
//! let results = Scanner::new(&Silent).scan(&matches)?;
//! assert_eq!(results.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::path::{Path, PathBuf};
use std::time::SystemTime;

mod coordinator;
mod sizer;

pub use coordinator::{PROGRESS_INTERVAL, PROGRESS_THRESHOLD, Scanner, default_workers};
pub use sizer::measure_directory;

/// Measurements for one matched directory.
///
/// Produced once by [`measure_directory`] and never modified afterwards;
/// filtering and selection only copy or reorder results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    path: PathBuf,
    file_count: u64,
    subdir_count: u64,
    total_size: u64,
    read_order: usize,
    modified_at: Option<SystemTime>,
}

impl ScanResult {
    /// Absolute path of the matched directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of files below the match
    pub fn file_count(&self) -> u64 {
        self.file_count
    }

    /// Number of directories in the match, the match itself included
    pub fn subdir_count(&self) -> u64 {
        self.subdir_count
    }

    /// Sum of file sizes in bytes
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// 1-based position in which the match was handed to the worker pool
    pub fn read_order(&self) -> usize {
        self.read_order
    }

    /// Modification time of the matched directory itself
    pub fn modified_at(&self) -> Option<SystemTime> {
        self.modified_at
    }
}

#[cfg(test)]
impl ScanResult {
    pub(crate) fn fixture(
        path: impl Into<PathBuf>,
        total_size: u64,
        read_order: usize,
        modified_at: Option<SystemTime>,
    ) -> Self {
        Self {
            path: path.into(),
            file_count: 1,
            subdir_count: 1,
            total_size,
            read_order,
            modified_at,
        }
    }
}

/// Sort results largest first; ties keep read order.
pub fn sort_by_size_desc(results: &mut [ScanResult]) {
    results.sort_by(|a, b| {
        b.total_size
            .cmp(&a.total_size)
            .then(a.read_order.cmp(&b.read_order))
    });
}
