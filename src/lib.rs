//! # modsweep
//!
//! Find, measure, filter and remove `node_modules` directories below a root
//! directory.
//!
//! ## Overview
//!
//! A sweep runs in stages:
//!
//! 1. **Locate**: walk the root and collect every `node_modules` directory,
//!    without descending into the ones already found
//! 2. **Scan**: size every match in parallel on a worker pool sized to the
//!    CPU count
//! 3. **Filter**: keep matches within the configured size range and age
//! 4. **Report**: print a table sorted by size, optionally export JSON
//! 5. **Select**: confirm, or pick matches interactively
//! 6. **Delete**: remove the chosen trees in parallel, counting successes and
//!    failures
//!
//! A single unreadable or undeletable directory never aborts a sweep; only a
//! root that cannot be read does.
//!
//! ## Library Usage
//!
//! ```no_run
//! use modsweep::cli::Cli;
//! use modsweep::commands;
//!
//! let cli = Cli::builder()
//!     .dir("/home/me/projects")
//!     .scan_only(true)
//!     .min_size("100M")
//!     .build();
//!
//! commands::execute(&cli)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The stages are also usable on their own:
//!
//! ```no_run
//! use std::path::Path;
//!
//! use modsweep::locate::{TARGET_DIR_NAME, find_matches};
//! use modsweep::logging::Logger;
//! use modsweep::progress::Silent;
//! use modsweep::scan::Scanner;
//!
//! let matches = find_matches(Path::new("/home/me"), TARGET_DIR_NAME, Logger::default())?;
//! let results = Scanner::new(&Silent).scan(&matches)?;
//! let total: u64 = results.iter().map(|r| r.total_size()).sum();
//! println!("{total} bytes in {} directories", results.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! The crate uses a combination of:
//! - `thiserror` for strongly-typed errors
//! - `miette` for rich diagnostic output in CLI

pub mod cli;
pub mod commands;
pub mod config;
pub mod delete;
pub mod error;
pub mod export;
pub mod filter;
pub mod format;
pub mod locate;
pub mod logging;
pub mod progress;
pub mod report;
pub mod scan;
pub mod select;
