use std::time::SystemTime;

use crate::config::ScanConfig;
use crate::scan::ScanResult;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Keep only the results that satisfy every bound set in `config`.
///
/// Age is measured against the clock at the moment of filtering, so a result
/// sitting right at the age threshold may fall on either side across runs.
pub fn filter_results(results: &[ScanResult], config: &ScanConfig) -> Vec<ScanResult> {
    filter_results_at(results, config, SystemTime::now())
}

/// [`filter_results`] with an explicit "now".
pub fn filter_results_at(
    results: &[ScanResult],
    config: &ScanConfig,
    now: SystemTime,
) -> Vec<ScanResult> {
    results
        .iter()
        .filter(|r| passes(r, config, now))
        .cloned()
        .collect()
}

fn passes(result: &ScanResult, config: &ScanConfig, now: SystemTime) -> bool {
    if let Some(min) = config.min_size()
        && result.total_size() < min
    {
        return false;
    }

    if let Some(max) = config.max_size()
        && result.total_size() > max
    {
        return false;
    }

    if let Some(threshold) = config.min_age_days() {
        // Unknown mtimes count as infinitely old
        if let Some(days) = age_in_days(result.modified_at(), now)
            && days < u64::from(threshold)
        {
            return false;
        }
    }

    true
}

/// Whole days between `modified` and `now`.
///
/// `None` when the time is unknown. A time in the future is 0 days old.
pub fn age_in_days(modified: Option<SystemTime>, now: SystemTime) -> Option<u64> {
    let modified = modified?;
    let elapsed = now.duration_since(modified).unwrap_or_default();
    Some(elapsed.as_secs() / SECONDS_PER_DAY)
}
