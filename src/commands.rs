//! The sweep pipeline.
//!
//! Locate matches, size them, filter, report, optionally export, then select
//! or confirm and delete. [`execute`] wires the pipeline to the real terminal;
//! [`Sweep::run`] takes the streams as parameters.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime};

use crate::cli::{Cli, normalize_path};
use crate::config::ScanConfig;
use crate::delete::{Deleter, DeletionTally};
use crate::error::{Result, SweepError};
use crate::export::export_results;
use crate::filter::filter_results;
use crate::locate::{TARGET_DIR_NAME, find_matches};
use crate::logging::Logger;
use crate::report::{write_deletion_summary, write_dry_run_plan, write_summary};
use crate::scan::{ScanResult, Scanner, sort_by_size_desc};
use crate::select::{confirm, select_interactive};

/// Execute a sweep based on the parsed CLI arguments.
pub fn execute(cli: &Cli) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute_with_io(cli, None, &mut stdin.lock(), &mut stdout.lock()).map(|_| ())
}

/// Execute a sweep with an explicit working directory and terminal streams.
pub fn execute_with_io(
    cli: &Cli,
    working_dir: Option<&Path>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<SweepOutcome> {
    let config = cli.to_config()?;

    let current_dir = match working_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().map_err(|source| SweepError::RootResolve {
            path: config.root().to_path_buf(),
            source,
        })?,
    };

    let root = resolve_root(config.root(), &current_dir)?;
    Sweep::new(config.with_root(root)).run(input, output)
}

/// Make `root` absolute and check that it is a readable directory.
///
/// # Errors
///
/// [`SweepError::RootAccess`] if the path cannot be stat'ed and
/// [`SweepError::NotADirectory`] if it is not a directory.
pub fn resolve_root(root: &Path, current_dir: &Path) -> Result<PathBuf> {
    let absolute = normalize_path(root, current_dir);

    let metadata = fs::metadata(&absolute).map_err(|source| SweepError::RootAccess {
        path: absolute.clone(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(SweepError::NotADirectory(absolute));
    }

    Ok(absolute)
}

/// What a sweep did, for callers that need more than the printed report.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepOutcome {
    /// Number of matches the locator found
    pub found: usize,
    /// Results left after filtering, in scan order
    pub retained: Vec<ScanResult>,
    /// Deletion counts, if deletion ran
    pub tally: Option<DeletionTally>,
    /// True when the user declined or cancelled the selection
    pub cancelled: bool,
}

/// One configured sweep.
pub struct Sweep {
    config: ScanConfig,
    log: Logger,
}

impl Sweep {
    /// `config.root()` must already be absolute, see [`resolve_root`]
    pub fn new(config: ScanConfig) -> Self {
        let log = Logger::new(config.verbose(), config.quiet());
        Self { config, log }
    }

    /// Run the whole pipeline.
    ///
    /// Only a bad root or a worker pool that fails to start is an error.
    /// Per-directory failures, export failures and user cancellation all
    /// finish with `Ok`.
    pub fn run(&self, input: &mut impl BufRead, output: &mut impl Write) -> Result<SweepOutcome> {
        let start = Instant::now();
        let config = &self.config;
        let log = self.log;
        let mut outcome = SweepOutcome::default();

        log.info(format!(
            "Scanning for {TARGET_DIR_NAME} in: {}",
            config.root().display()
        ));
        let matches = find_matches(config.root(), TARGET_DIR_NAME, log)?;
        outcome.found = matches.len();

        if matches.is_empty() {
            log.info(format!("No {TARGET_DIR_NAME} directories found!"));
            return Ok(outcome);
        }

        log.info(format!(
            "Found {} {TARGET_DIR_NAME} directories, calculating sizes...",
            matches.len()
        ));
        let mut results = Scanner::new(&log)
            .workers(config.workers().unwrap_or(0))
            .scan(&matches)?;

        if config.has_filters() {
            results = filter_results(&results, config);
            log.info(format!(
                "After filtering: {} {TARGET_DIR_NAME} directories",
                results.len()
            ));
        }
        outcome.retained = results.clone();

        write_summary(output, &results, SystemTime::now()).map_err(SweepError::Terminal)?;

        if let Some(path) = config.export_path() {
            // Export is best effort and never stops the sweep
            match export_results(&results, path) {
                Ok(()) => log.info(format!("Results exported to: {}", path.display())),
                Err(err) => log.warn(format!("Export failed: {err}")),
            }
        }

        log.info(format!(
            "Scan completed in {:.2} seconds",
            start.elapsed().as_secs_f64()
        ));

        if config.scan_only() || results.is_empty() {
            return Ok(outcome);
        }

        if config.interactive() {
            sort_by_size_desc(&mut results);
            match select_interactive(&results, input, output)? {
                Some(chosen) => results = chosen,
                None => {
                    outcome.cancelled = true;
                    return Ok(outcome);
                }
            }
        } else if !config.auto_confirm() && !config.dry_run() {
            let prompt = format!("\nDo you want to DELETE all these {TARGET_DIR_NAME} directories?");
            if !confirm(&prompt, input, output)? {
                writeln!(output, "Operation cancelled by user").map_err(SweepError::Terminal)?;
                outcome.cancelled = true;
                return Ok(outcome);
            }
        }

        if config.dry_run() {
            write_dry_run_plan(output, &results).map_err(SweepError::Terminal)?;
        }

        let delete_start = Instant::now();
        let tally = Deleter::new(&log)
            .workers(config.workers().unwrap_or(0))
            .dry_run(config.dry_run())
            .delete_all(&results)?;
        log.verbose(
            1,
            format!("Processed {} of {} directories", tally.total(), results.len()),
        );

        // Failed deletions are reported, not turned into an error exit
        write_deletion_summary(
            output,
            tally,
            config.dry_run(),
            delete_start.elapsed(),
            start.elapsed(),
        )
        .map_err(SweepError::Terminal)?;

        outcome.tally = Some(tally);
        Ok(outcome)
    }
}
