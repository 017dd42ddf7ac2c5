use std::path::{Path, PathBuf};

use clap::Parser;

use crate::cli::{Cli, normalize_path};
use crate::error::SweepError;

#[test]
fn test_cli_defaults() {
    let cli = Cli::parse_from(["modsweep"]);
    let opts = cli.sweep_opts();

    assert_eq!(opts.dir(), Path::new("."));
    assert!(!opts.dry_run());
    assert!(!opts.auto_confirm());
    assert!(!opts.scan_only());
    assert!(!opts.interactive());
    assert_eq!(opts.min_size(), None);
    assert_eq!(opts.older_than(), None);
    assert_eq!(opts.export(), None);
    assert_eq!(opts.jobs(), None);
    assert_eq!(cli.global_opts().verbose(), 0);
    assert!(!cli.global_opts().quiet());
}

#[test]
fn test_cli_all_flags() {
    let cli = Cli::parse_from([
        "modsweep",
        "--dir",
        "/projects",
        "--dry-run",
        "-y",
        "--scan",
        "--min-size",
        "1M",
        "--max-size",
        "2G",
        "--older-than",
        "30",
        "--export",
        "out.json",
        "-j",
        "4",
        "-vv",
    ]);
    let opts = cli.sweep_opts();

    assert_eq!(opts.dir(), Path::new("/projects"));
    assert!(opts.dry_run());
    assert!(opts.auto_confirm());
    assert!(opts.scan_only());
    assert_eq!(opts.min_size(), Some("1M"));
    assert_eq!(opts.max_size(), Some("2G"));
    assert_eq!(opts.older_than(), Some(30));
    assert_eq!(opts.export(), Some(Path::new("out.json")));
    assert_eq!(opts.jobs(), Some(4));
    assert_eq!(cli.global_opts().verbose(), 2);
}

#[test]
fn test_interactive_conflicts_with_yes() {
    let result = Cli::try_parse_from(["modsweep", "--interactive", "--yes"]);
    assert!(result.is_err());
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    let result = Cli::try_parse_from(["modsweep", "-q", "-v"]);
    assert!(result.is_err());
}

#[test]
fn test_zero_jobs_rejected() {
    let result = Cli::try_parse_from(["modsweep", "--jobs", "0"]);
    assert!(result.is_err());
}

#[test]
fn test_to_config_parses_sizes() {
    let cli = Cli::parse_from([
        "modsweep",
        "--min-size",
        "1K",
        "--max-size",
        "0",
        "--older-than",
        "7",
        "-j",
        "2",
    ]);
    let config = cli.to_config().unwrap();

    assert_eq!(config.min_size(), Some(1024));
    // zero means unset
    assert_eq!(config.max_size(), None);
    assert_eq!(config.min_age_days(), Some(7));
    assert_eq!(config.workers(), Some(2));
}

#[test]
fn test_to_config_rejects_bad_size() {
    let cli = Cli::builder().min_size("lots").build();
    assert!(matches!(cli.to_config(), Err(SweepError::InvalidSize(..))));
}

#[test]
fn test_quiet_zeroes_verbosity() {
    let cli = Cli::builder().verbose(3).quiet(true).build();
    let config = cli.to_config().unwrap();
    assert_eq!(config.verbose(), 0);
    assert!(config.quiet());
}

#[test]
fn test_cli_builder() {
    let cli = Cli::builder()
        .dir("custom/root")
        .dry_run(true)
        .interactive(true)
        .export("r.json")
        .older_than(10)
        .jobs(3)
        .build();

    let config = cli.to_config().unwrap();
    assert_eq!(config.root(), Path::new("custom/root"));
    assert!(config.dry_run());
    assert!(config.interactive());
    assert_eq!(config.export_path(), Some(Path::new("r.json")));
    assert_eq!(config.min_age_days(), Some(10));
    assert_eq!(config.workers(), Some(3));
}

#[test]
fn test_normalize_path() {
    let cwd = if cfg!(windows) {
        PathBuf::from("C:\\work")
    } else {
        PathBuf::from("/work")
    };

    let normalized = normalize_path(Path::new("./a/./b"), &cwd);
    assert!(normalized.is_absolute());
    assert!(normalized.ends_with("a/b"));
    assert!(!normalized.to_string_lossy().contains("/./"));

    let normalized = normalize_path(Path::new("a/b/../c/./d/../e"), &cwd);
    assert_eq!(normalized, cwd.join("a").join("c").join("e"));

    let normalized = normalize_path(Path::new("../../.."), &cwd);
    assert!(normalized.is_absolute());
    assert!(!normalized.to_string_lossy().contains(".."));

    let abs = cwd.join("already");
    assert_eq!(normalize_path(&abs, Path::new("/elsewhere")), abs);
}
