use std::fs;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use rayon::prelude::*;

use crate::error::Result;
use crate::progress::DeletionEvents;
use crate::scan::{ScanResult, default_workers};

/// Outcome of a deletion batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeletionTally {
    /// Paths removed (or, in a dry run, that would have been removed)
    pub deleted: usize,
    /// Paths whose removal failed
    pub failed: usize,
}

impl DeletionTally {
    /// Number of paths processed
    pub fn total(&self) -> usize {
        self.deleted + self.failed
    }
}

/// Removes a batch of matched directories on a dedicated worker pool.
pub struct Deleter<'a> {
    workers: usize,
    dry_run: bool,
    events: &'a dyn DeletionEvents,
}

impl<'a> Deleter<'a> {
    /// Create a deleter reporting to `events`, sized to the CPU count
    pub fn new(events: &'a dyn DeletionEvents) -> Self {
        Self {
            workers: default_workers(),
            dry_run: false,
            events,
        }
    }

    /// Override the number of worker threads (0 keeps the default)
    pub fn workers(mut self, workers: usize) -> Self {
        if workers > 0 {
            self.workers = workers;
        }
        self
    }

    /// Only report what would be deleted
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Remove every result's directory tree.
    ///
    /// A failed removal is reported and counted but never stops the rest of
    /// the batch, so `deleted + failed` always equals `results.len()`. In a
    /// dry run nothing on disk is touched and every path counts as deleted.
    pub fn delete_all(&self, results: &[ScanResult]) -> Result<DeletionTally> {
        let tally = Mutex::new(DeletionTally::default());

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("modsweep-delete-{i}"))
            .build()?;

        pool.install(|| {
            results.par_iter().for_each(|result| {
                let outcome = self.delete_one(result.path());

                // A poisoned lock still holds valid counts
                let mut tally = tally.lock().unwrap_or_else(|e| e.into_inner());
                match outcome {
                    Ok(()) => tally.deleted += 1,
                    Err(_) => tally.failed += 1,
                }
            });
        });

        Ok(tally.into_inner().unwrap_or_else(|e| e.into_inner()))
    }

    fn delete_one(&self, path: &Path) -> io::Result<()> {
        if self.dry_run {
            return Ok(());
        }

        self.events.deleting(path);
        match remove_tree(path) {
            Ok(()) => {
                self.events.deleted(path);
                Ok(())
            }
            Err(err) => {
                self.events.failed(path, &err);
                Err(err)
            }
        }
    }
}

/// Recursively remove `path`; a path that is already gone counts as removed.
fn remove_tree(path: &Path) -> io::Result<()> {
    match fs::remove_dir_all(path) {
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
