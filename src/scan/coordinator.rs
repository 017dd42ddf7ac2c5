use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use super::{ScanResult, measure_directory};
use crate::error::Result;
use crate::progress::ScanProgress;

/// Batches of this size or smaller report no progress.
pub const PROGRESS_THRESHOLD: usize = 10;

/// Progress is reported every this many completions, and at the last one.
pub const PROGRESS_INTERVAL: usize = 10;

/// Worker count used when none is configured: the detected CPU parallelism.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Sizes a batch of matched directories on a dedicated worker pool.
pub struct Scanner<'a> {
    workers: usize,
    progress: &'a dyn ScanProgress,
}

impl<'a> Scanner<'a> {
    /// Create a scanner reporting to `progress`, sized to the CPU count
    pub fn new(progress: &'a dyn ScanProgress) -> Self {
        Self {
            workers: default_workers(),
            progress,
        }
    }

    /// Override the number of worker threads (0 keeps the default)
    pub fn workers(mut self, workers: usize) -> Self {
        if workers > 0 {
            self.workers = workers;
        }
        self
    }

    /// Measure every path, returning exactly one result per input.
    ///
    /// Each result's `read_order` is its index in `paths` plus one. A path
    /// that cannot be read yields a zero-valued result rather than an error;
    /// the only failure is the pool itself refusing to start.
    ///
    /// The returned order is not meaningful. Callers that need a stable order
    /// must sort.
    pub fn scan(&self, paths: &[PathBuf]) -> Result<Vec<ScanResult>> {
        let total = paths.len();
        let report = total > PROGRESS_THRESHOLD;
        let processed = AtomicUsize::new(0);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("modsweep-scan-{i}"))
            .build()?;

        if report {
            self.progress.started(total);
        }

        let results = pool.install(|| {
            paths
                .par_iter()
                .enumerate()
                .map(|(index, path)| {
                    let result = measure_directory(path, index + 1);

                    if report {
                        let done = processed.fetch_add(1, Ordering::Relaxed) + 1;
                        if done % PROGRESS_INTERVAL == 0 || done == total {
                            self.progress.advanced(done, total);
                        }
                    }

                    result
                })
                .collect::<Vec<_>>()
        });

        if report {
            self.progress.finished(total);
        }

        Ok(results)
    }
}
