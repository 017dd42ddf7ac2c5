//! Error types for modsweep.
//!
//! This module defines all error types used throughout modsweep, using
//! a combination of `thiserror` for ergonomic error definitions and `miette`
//! for rich diagnostic output.
//!
//! # Error Handling Strategy
//!
//! - All errors derive from [`SweepError`]
//! - Only conditions that make the whole sweep meaningless (a bad root, a
//!   worker pool that cannot start) are returned as errors
//! - Per-directory failures during sizing or deletion are folded into results
//!   and counters instead of being raised
//! - Errors are automatically converted to `miette::Result` for CLI output
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use modsweep::error::{Result, SweepError};
//!
//! fn check_root(path: &Path) -> Result<()> {
//!     if !path.is_dir() {
//!         return Err(SweepError::NotADirectory(path.to_path_buf()));
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error types that can occur in modsweep operations
#[derive(Error, Debug, Diagnostic)]
pub enum SweepError {
    /// The root path could not be turned into an absolute path.
    ///
    /// Raised when a relative root is given and the current working directory
    /// cannot be determined.
    #[error("Failed to resolve '{path}' to an absolute path")]
    #[diagnostic(
        code(modsweep::root::resolve_error),
        help("Pass an absolute path with --dir, or run from an accessible directory.")
    )]
    RootResolve {
        /// The path as given on the command line
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The root path does not exist or cannot be stat'ed.
    #[error("Cannot access directory '{path}'")]
    #[diagnostic(
        code(modsweep::root::access_error),
        help("Check that the directory exists and that you have permission to read it.")
    )]
    RootAccess {
        /// The absolute root path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The root path exists but is not a directory.
    #[error("'{0}' is not a directory")]
    #[diagnostic(code(modsweep::root::not_a_directory))]
    NotADirectory(
        /// The offending path
        PathBuf,
    ),

    /// Traversal of the root directory itself failed.
    ///
    /// Failures below the root are skipped; this is only raised when the walk
    /// cannot even list the root.
    #[error("Failed to scan directory '{path}'")]
    #[diagnostic(code(modsweep::locate::traversal_error))]
    Traversal {
        /// The root being walked
        path: PathBuf,
        /// The underlying walk error
        #[source]
        source: walkdir::Error,
    },

    /// The worker pool for sizing or deletion could not be started.
    #[error("Failed to start worker pool")]
    #[diagnostic(
        code(modsweep::pool::build_error),
        help("Try lowering the worker count with --jobs.")
    )]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    /// Writing the export file failed.
    #[error("Failed to write export file '{path}'")]
    #[diagnostic(code(modsweep::export::io_error))]
    ExportIo {
        /// The export destination
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Encoding results as JSON failed.
    #[error("Failed to encode results as JSON")]
    #[diagnostic(code(modsweep::export::encode_error))]
    ExportEncode(#[from] serde_json::Error),

    /// Invalid size specification for --min-size or --max-size.
    ///
    /// Valid suffixes are B (bytes), K (kibibytes), M (mebibytes),
    /// G (gibibytes), or T (tebibytes). Numbers without suffix are bytes.
    #[error("Invalid size: '{0}' - {1}")]
    #[diagnostic(
        code(modsweep::config::invalid_size),
        help("Specify a size as a number with optional suffix (e.g., '5G', '500M', '1024K', or raw bytes)")
    )]
    InvalidSize(
        /// The invalid size value provided
        String,
        /// Description of the parsing error
        String,
    ),

    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed")]
    #[diagnostic(code(modsweep::io::terminal))]
    Terminal(#[source] std::io::Error),

    /// Configuration is incomplete or contradictory.
    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(modsweep::config::error),
        help("Check the required configuration parameters.")
    )]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },
}

/// Type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SweepError>;
