//! Sweep configuration.
//!
//! # Example
//!
//! ```
//! use modsweep::config::ScanConfig;
//!
//! let config = ScanConfig::builder()
//!     .root("/work")
//!     .min_size(100 * 1024 * 1024) // 100 MiB
//!     .min_age_days(30)
//!     .dry_run(true)
//!     .build()?;
//!
//! assert_eq!(config.min_size(), Some(100 * 1024 * 1024));
//! assert!(config.has_filters());
//! # Ok::<(), modsweep::error::SweepError>(())
//! ```

use std::path::{Path, PathBuf};

use crate::error::{Result, SweepError};

/// Everything one sweep needs to know.
///
/// Size and age bounds of zero are stored as "unset".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directory to search
    root: PathBuf,
    /// Keep results at least this large (bytes, inclusive)
    min_size: Option<u64>,
    /// Keep results at most this large (bytes, inclusive)
    max_size: Option<u64>,
    /// Keep results at least this many whole days old
    min_age_days: Option<u32>,
    /// Report deletions without touching the filesystem
    dry_run: bool,
    /// Stop after the summary
    scan_only: bool,
    /// Skip the confirmation prompt
    auto_confirm: bool,
    /// Let the user pick which results to delete
    interactive: bool,
    /// Write retained results as JSON here
    export_path: Option<PathBuf>,
    /// Worker threads per pool; `None` uses the CPU count
    workers: Option<usize>,
    /// Verbosity level for stderr logging
    verbose: u8,
    /// Suppress informational logging when true
    quiet: bool,
}

impl ScanConfig {
    /// Creates a new builder for [`ScanConfig`]
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn min_size(&self) -> Option<u64> {
        self.min_size
    }

    pub fn max_size(&self) -> Option<u64> {
        self.max_size
    }

    pub fn min_age_days(&self) -> Option<u32> {
        self.min_age_days
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn scan_only(&self) -> bool {
        self.scan_only
    }

    pub fn auto_confirm(&self) -> bool {
        self.auto_confirm
    }

    pub fn interactive(&self) -> bool {
        self.interactive
    }

    pub fn export_path(&self) -> Option<&Path> {
        self.export_path.as_deref()
    }

    pub fn workers(&self) -> Option<usize> {
        self.workers
    }

    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// True when any size or age bound is set
    pub fn has_filters(&self) -> bool {
        self.min_size.is_some() || self.max_size.is_some() || self.min_age_days.is_some()
    }

    /// Same configuration with a different root
    pub(crate) fn with_root(&self, root: PathBuf) -> Self {
        Self {
            root,
            ..self.clone()
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            min_size: None,
            max_size: None,
            min_age_days: None,
            dry_run: false,
            scan_only: false,
            auto_confirm: false,
            interactive: false,
            export_path: None,
            workers: None,
            verbose: 0,
            quiet: false,
        }
    }
}

/// Builder for [`ScanConfig`]
#[derive(Debug, Default)]
pub struct ScanConfigBuilder {
    root: Option<PathBuf>,
    min_size: Option<u64>,
    max_size: Option<u64>,
    min_age_days: Option<u32>,
    dry_run: bool,
    scan_only: bool,
    auto_confirm: bool,
    interactive: bool,
    export_path: Option<PathBuf>,
    workers: Option<usize>,
    verbose: u8,
    quiet: bool,
}

impl ScanConfigBuilder {
    /// Set the directory to search
    pub fn root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.root = Some(dir.into());
        self
    }

    /// Set the minimum size in bytes (0 clears it)
    pub fn min_size(mut self, bytes: u64) -> Self {
        self.min_size = Some(bytes).filter(|b| *b > 0);
        self
    }

    /// Set the maximum size in bytes (0 clears it)
    pub fn max_size(mut self, bytes: u64) -> Self {
        self.max_size = Some(bytes).filter(|b| *b > 0);
        self
    }

    /// Set the minimum age in days (0 clears it)
    pub fn min_age_days(mut self, days: u32) -> Self {
        self.min_age_days = Some(days).filter(|d| *d > 0);
        self
    }

    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    pub fn scan_only(mut self, enabled: bool) -> Self {
        self.scan_only = enabled;
        self
    }

    pub fn auto_confirm(mut self, enabled: bool) -> Self {
        self.auto_confirm = enabled;
        self
    }

    pub fn interactive(mut self, enabled: bool) -> Self {
        self.interactive = enabled;
        self
    }

    /// Set the JSON export destination
    pub fn export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = Some(path.into());
        self
    }

    /// Set the worker count for both pools
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Build the [`ScanConfig`]
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::ConfigError`] if the worker count is zero.
    pub fn build(self) -> Result<ScanConfig> {
        if self.workers == Some(0) {
            return Err(SweepError::ConfigError {
                message: "Worker count must be at least 1".to_string(),
            });
        }

        Ok(ScanConfig {
            root: self.root.unwrap_or_else(|| PathBuf::from(".")),
            min_size: self.min_size,
            max_size: self.max_size,
            min_age_days: self.min_age_days,
            dry_run: self.dry_run,
            scan_only: self.scan_only,
            auto_confirm: self.auto_confirm,
            interactive: self.interactive,
            export_path: self.export_path,
            workers: self.workers,
            verbose: self.verbose,
            quiet: self.quiet,
        })
    }
}
