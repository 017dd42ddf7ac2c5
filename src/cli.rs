//! Command-line interface definitions for modsweep.
//!
//! This module defines the CLI structure using clap. The main entry point is
//! the [`Cli`] struct, which converts into a [`ScanConfig`] for the sweep
//! pipeline.
//!
//! # Example
//!
//! ```no_run
//! use modsweep::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! let config = cli.to_config()?;
//! println!("Sweeping {}", config.root().display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::ScanConfig;
use crate::error::Result;
use crate::format::parse_size;

#[cfg(test)]
mod tests;

/// Main command-line interface for modsweep.
#[derive(Debug, Parser)]
#[command(
    name = "modsweep",
    bin_name = "modsweep",
    author,
    version,
    about = "Scan, measure and delete node_modules directories",
    long_about = None,
    after_help = "Examples:\n  \
        modsweep --scan                          Just scan and show results\n  \
        modsweep --dir ~/projects                Scan a specific directory\n  \
        modsweep --dry-run                       Show what would be deleted\n  \
        modsweep --min-size 1G                   Only directories of 1 GiB or more\n  \
        modsweep --older-than 30                 Only directories untouched for 30 days\n  \
        modsweep --interactive                   Choose which directories to delete\n  \
        modsweep --scan --export results.json    Export results to JSON"
)]
pub struct Cli {
    #[command(flatten)]
    global_opts: GlobalOpts,

    #[command(flatten)]
    sweep_opts: SweepOpts,
}

/// Output options.
#[derive(Debug, Parser)]
pub struct GlobalOpts {
    /// Enable verbose output (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, env = "MODSWEEP_VERBOSE")]
    verbose: u8,

    /// Silence all output except for errors and the result tables
    #[arg(short, long, conflicts_with = "verbose", env = "MODSWEEP_QUIET")]
    quiet: bool,
}

impl GlobalOpts {
    /// Get the verbose level
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    /// Check if quiet mode is enabled
    pub fn quiet(&self) -> bool {
        self.quiet
    }
}

/// What to scan and what to do with the results.
#[derive(Debug, Parser)]
pub struct SweepOpts {
    /// Directory to scan
    #[arg(long, default_value = ".", env = "MODSWEEP_DIR")]
    dir: PathBuf,

    /// Show what would be deleted without actually deleting
    #[arg(long, env = "MODSWEEP_DRY_RUN")]
    dry_run: bool,

    /// Answer yes to the confirmation prompt (use with caution!)
    #[arg(short = 'y', long = "yes", env = "MODSWEEP_YES")]
    auto_confirm: bool,

    /// Only scan and show results, don't delete
    #[arg(long = "scan", env = "MODSWEEP_SCAN_ONLY")]
    scan_only: bool,

    /// Only keep directories at least this large (e.g., "500M", "1G", or bytes)
    #[arg(long, env = "MODSWEEP_MIN_SIZE")]
    min_size: Option<String>,

    /// Only keep directories at most this large (e.g., "500M", "1G", or bytes)
    #[arg(long, env = "MODSWEEP_MAX_SIZE")]
    max_size: Option<String>,

    /// Only keep directories not modified for at least this many days
    #[arg(long, value_name = "DAYS", env = "MODSWEEP_OLDER_THAN")]
    older_than: Option<u32>,

    /// Choose which directories to delete from a numbered list
    #[arg(
        short,
        long,
        conflicts_with = "auto_confirm",
        env = "MODSWEEP_INTERACTIVE"
    )]
    interactive: bool,

    /// Export results to a JSON file
    #[arg(long, value_name = "FILE", env = "MODSWEEP_EXPORT")]
    export: Option<PathBuf>,

    /// Number of worker threads (defaults to the number of CPUs)
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u16).range(1..),
        env = "MODSWEEP_JOBS"
    )]
    jobs: Option<u16>,
}

impl SweepOpts {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn auto_confirm(&self) -> bool {
        self.auto_confirm
    }

    pub fn scan_only(&self) -> bool {
        self.scan_only
    }

    pub fn min_size(&self) -> Option<&str> {
        self.min_size.as_deref()
    }

    pub fn max_size(&self) -> Option<&str> {
        self.max_size.as_deref()
    }

    pub fn older_than(&self) -> Option<u32> {
        self.older_than
    }

    pub fn interactive(&self) -> bool {
        self.interactive
    }

    pub fn export(&self) -> Option<&Path> {
        self.export.as_deref()
    }

    pub fn jobs(&self) -> Option<u16> {
        self.jobs
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the global options
    pub fn global_opts(&self) -> &GlobalOpts {
        &self.global_opts
    }

    /// Get the sweep options
    pub fn sweep_opts(&self) -> &SweepOpts {
        &self.sweep_opts
    }

    /// Convert the parsed flags into a [`ScanConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::SweepError::InvalidSize`] if a size flag
    /// cannot be parsed.
    pub fn to_config(&self) -> Result<ScanConfig> {
        let opts = &self.sweep_opts;
        let quiet = self.global_opts.quiet();

        let mut builder = ScanConfig::builder()
            .root(opts.dir())
            .dry_run(opts.dry_run())
            .scan_only(opts.scan_only())
            .auto_confirm(opts.auto_confirm())
            .interactive(opts.interactive())
            .verbose(if quiet { 0 } else { self.global_opts.verbose() })
            .quiet(quiet);

        if let Some(size) = opts.min_size() {
            builder = builder.min_size(parse_size(size)?);
        }
        if let Some(size) = opts.max_size() {
            builder = builder.max_size(parse_size(size)?);
        }
        if let Some(days) = opts.older_than() {
            builder = builder.min_age_days(days);
        }
        if let Some(path) = opts.export() {
            builder = builder.export_path(path);
        }
        if let Some(jobs) = opts.jobs() {
            builder = builder.workers(usize::from(jobs));
        }

        builder.build()
    }

    /// Create a builder for programmatic construction
    pub fn builder() -> CliBuilder {
        CliBuilder::default()
    }
}

/// Builder for [`Cli`]
#[derive(Debug, Default)]
pub struct CliBuilder {
    dir: Option<PathBuf>,
    dry_run: bool,
    auto_confirm: bool,
    scan_only: bool,
    min_size: Option<String>,
    max_size: Option<String>,
    older_than: Option<u32>,
    interactive: bool,
    export: Option<PathBuf>,
    jobs: Option<u16>,
    verbose: u8,
    quiet: bool,
}

impl CliBuilder {
    /// Set the directory to scan
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    pub fn auto_confirm(mut self, enabled: bool) -> Self {
        self.auto_confirm = enabled;
        self
    }

    pub fn scan_only(mut self, enabled: bool) -> Self {
        self.scan_only = enabled;
        self
    }

    /// Set the minimum size as it would be typed on the command line
    pub fn min_size(mut self, size: impl Into<String>) -> Self {
        self.min_size = Some(size.into());
        self
    }

    /// Set the maximum size as it would be typed on the command line
    pub fn max_size(mut self, size: impl Into<String>) -> Self {
        self.max_size = Some(size.into());
        self
    }

    pub fn older_than(mut self, days: u32) -> Self {
        self.older_than = Some(days);
        self
    }

    pub fn interactive(mut self, enabled: bool) -> Self {
        self.interactive = enabled;
        self
    }

    pub fn export(mut self, path: impl Into<PathBuf>) -> Self {
        self.export = Some(path.into());
        self
    }

    pub fn jobs(mut self, jobs: u16) -> Self {
        self.jobs = Some(jobs);
        self
    }

    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    pub fn quiet(mut self, enabled: bool) -> Self {
        self.quiet = enabled;
        self
    }

    /// Build the Cli instance
    pub fn build(self) -> Cli {
        Cli {
            global_opts: GlobalOpts {
                verbose: self.verbose,
                quiet: self.quiet,
            },
            sweep_opts: SweepOpts {
                dir: self.dir.unwrap_or_else(|| PathBuf::from(".")),
                dry_run: self.dry_run,
                auto_confirm: self.auto_confirm,
                scan_only: self.scan_only,
                min_size: self.min_size,
                max_size: self.max_size,
                older_than: self.older_than,
                interactive: self.interactive,
                export: self.export,
                jobs: self.jobs,
            },
        }
    }
}

/// Normalize a path to be absolute and clean, without requiring it to exist.
///
/// This function:
/// - Converts relative paths to absolute using the current directory
/// - Removes `.` and `..` components where possible
/// - Does NOT resolve symlinks (preserves user intent)
/// - Does NOT require the path to exist
pub(crate) fn normalize_path(path: &Path, current_dir: &Path) -> PathBuf {
    use std::path::Component;

    let absolute = if path.is_relative() {
        current_dir.join(path)
    } else {
        path.to_path_buf()
    };

    let mut components = Vec::new();
    for component in absolute.components() {
        match component {
            Component::ParentDir => {
                // `..` at the root stays at the root
                if let Some(last) = components.last()
                    && matches!(last, Component::Normal(_))
                {
                    components.pop();
                } else if !matches!(
                    components.last(),
                    Some(Component::RootDir | Component::Prefix(_))
                ) {
                    components.push(component);
                }
            }
            Component::CurDir => continue,
            _ => components.push(component),
        }
    }

    components.iter().collect()
}
