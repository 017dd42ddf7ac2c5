use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, SweepError};
use crate::logging::Logger;

/// Directory name the sweep looks for.
pub const TARGET_DIR_NAME: &str = "node_modules";

/// Find every directory named `name` below `root`, in discovery order.
///
/// Descent stops at each match, so a `node_modules` nested inside another one
/// is never reported separately. Unreadable directories below the root are
/// skipped; only a failure to read the root itself is an error.
///
/// A root that is itself named `name` is reported as the only match.
///
/// # Errors
///
/// Returns [`SweepError::Traversal`] if the root cannot be read.
pub fn find_matches(root: &Path, name: &str, log: Logger) -> Result<Vec<PathBuf>> {
    let mut matches = Vec::new();
    let mut walker = WalkDir::new(root).into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(SweepError::Traversal {
                    path: root.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                log.verbose(2, format!("  Skipping unreadable entry: {err}"));
                continue;
            }
        };

        if entry.file_type().is_dir() && entry.file_name() == name {
            matches.push(entry.into_path());
            walker.skip_current_dir();
        }
    }

    Ok(matches)
}
