//! Summary tables written to the primary output.

use std::io::{self, Write};
use std::time::{Duration, SystemTime};

use crate::delete::DeletionTally;
use crate::filter::age_in_days;
use crate::format::{format_count, format_number, format_size};
use crate::scan::{ScanResult, sort_by_size_desc};

const TABLE_WIDTH: usize = 140;
const SUMMARY_WIDTH: usize = 80;

/// Coarse human label for how long ago `modified` was.
pub fn age_bucket(modified: Option<SystemTime>, now: SystemTime) -> String {
    match age_in_days(modified, now) {
        None => "unknown".to_string(),
        Some(0) => "today".to_string(),
        Some(1) => "1 day".to_string(),
        Some(days @ 2..30) => format!("{days} days"),
        Some(days @ 30..365) => format!("{} mo", days / 30),
        Some(days) => format!("{} yr", days / 365),
    }
}

/// Write the results table, largest first, followed by totals.
///
/// `results` itself is left in its original order.
pub fn write_summary(
    out: &mut impl Write,
    results: &[ScanResult],
    now: SystemTime,
) -> io::Result<()> {
    let mut sorted = results.to_vec();
    sort_by_size_desc(&mut sorted);

    let heavy = "=".repeat(TABLE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{heavy}")?;
    writeln!(out, "Found node_modules directories (sorted by size, largest first):")?;
    writeln!(out, "{heavy}")?;
    writeln!(
        out,
        "{:<8} {:<8} {:<12} {:<12} {:<12} {:<12} Path",
        "Order", "Read", "Size", "Files", "Dirs", "Age"
    )?;
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;

    let (mut total_size, mut total_files, mut total_dirs) = (0u64, 0u64, 0u64);
    for (i, result) in sorted.iter().enumerate() {
        writeln!(
            out,
            "{:<8} {:<8} {:<12} {:<12} {:<12} {:<12} {}",
            i + 1,
            result.read_order(),
            format_size(result.total_size()),
            format_number(result.file_count()),
            format_number(result.subdir_count()),
            age_bucket(result.modified_at(), now),
            result.path().display()
        )?;
        total_size += result.total_size();
        total_files += result.file_count();
        total_dirs += result.subdir_count();
    }

    writeln!(out, "{heavy}")?;
    writeln!(out, "TOTAL: {} node_modules directories", sorted.len())?;
    writeln!(out, "Total Size: {}", format_size(total_size))?;
    writeln!(out, "Total Files: {}", format_count(total_files))?;
    writeln!(out, "Total Directories: {}", format_count(total_dirs))?;
    writeln!(out, "{heavy}")
}

/// List the paths a dry run would remove, in selection order.
pub fn write_dry_run_plan(out: &mut impl Write, results: &[ScanResult]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "DRY RUN MODE - No files will be deleted")?;
    for result in results {
        writeln!(out, "[DRY RUN] Would delete: {}", result.path().display())?;
    }
    Ok(())
}

/// Write the outcome of a deletion batch with its timings.
pub fn write_deletion_summary(
    out: &mut impl Write,
    tally: DeletionTally,
    dry_run: bool,
    deletion_time: Duration,
    total_time: Duration,
) -> io::Result<()> {
    let rule = "=".repeat(SUMMARY_WIDTH);
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    if dry_run {
        writeln!(out, "DRY RUN SUMMARY:")?;
        writeln!(out, "   Would delete: {} directories", tally.deleted)?;
    } else {
        writeln!(out, "DELETION SUMMARY:")?;
        writeln!(out, "   Successfully deleted: {} directories", tally.deleted)?;
        if tally.failed > 0 {
            writeln!(out, "   Failed: {} directories", tally.failed)?;
        }
    }
    writeln!(out, "Deletion time: {:.2} seconds", deletion_time.as_secs_f64())?;
    writeln!(out, "Total time: {:.2} seconds", total_time.as_secs_f64())?;
    writeln!(out, "{rule}")
}
