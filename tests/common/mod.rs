use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use assert_fs::TempDir;
use filetime::FileTime;
use modsweep::cli::Cli;
use modsweep::commands::{SweepOutcome, execute_with_io};
use modsweep::error::Result;

/// A temporary project tree that is removed when dropped.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temporary workspace"),
        }
    }

    /// Create `<project>/node_modules` holding the given `(relative path, size)`
    /// files and return its path.
    pub fn add_node_modules(&self, project: &str, files: &[(&str, usize)]) -> PathBuf {
        let nm = self.dir.path().join(project).join("node_modules");
        fs::create_dir_all(&nm).expect("failed to create node_modules");

        for (rel, size) in files {
            let file = nm.join(rel);
            if let Some(parent) = file.parent() {
                fs::create_dir_all(parent).expect("failed to create package dir");
            }
            fs::write(&file, vec![b'x'; *size]).expect("failed to write package file");
        }

        nm
    }

    /// Back-date a directory's modification time by `days`.
    pub fn set_age_days(&self, path: &Path, days: u64) {
        let mtime = SystemTime::now() - Duration::from_secs(days * 24 * 60 * 60);
        filetime::set_file_mtime(path, FileTime::from_system_time(mtime))
            .expect("failed to set mtime");
    }
}

impl std::ops::Deref for TestWorkspace {
    type Target = TempDir;

    fn deref(&self) -> &Self::Target {
        &self.dir
    }
}

/// Run a sweep over the workspace, feeding `stdin` as the user's answers.
///
/// Returns the outcome together with everything written to stdout.
pub fn run_sweep(
    cli: &Cli,
    workspace: &TestWorkspace,
    stdin: &str,
) -> (Result<SweepOutcome>, String) {
    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let mut output = Vec::new();

    let outcome = execute_with_io(cli, Some(workspace.path()), &mut input, &mut output);
    let stdout = String::from_utf8(output).expect("stdout was not UTF-8");

    (outcome, stdout)
}

/// The standard two-project fixture: `a` holds 10 bytes in two files, `b`
/// holds 5 bytes in one.
pub fn two_projects() -> (TestWorkspace, PathBuf, PathBuf) {
    let ws = TestWorkspace::new();
    let a = ws.add_node_modules("a", &[("one.js", 4), ("two.js", 6)]);
    let b = ws.add_node_modules("b", &[("only.js", 5)]);
    (ws, a, b)
}
