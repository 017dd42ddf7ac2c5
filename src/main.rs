//! # modsweep CLI
//!
//! Scan a directory tree for `node_modules` directories, report their sizes
//! and ages, and delete them.
//!
//! ## Quick Start
//!
//! ```bash
//! # Report only
//! modsweep --scan --dir ~/projects
//!
//! # See what would go, then do it
//! modsweep --dry-run --older-than 30
//! modsweep --older-than 30 --yes
//!
//! # Pick from a numbered list
//! modsweep --interactive
//! ```
//!
//! ## Environment Variables
//!
//! Every flag can also be set through the environment, e.g. `MODSWEEP_DIR`,
//! `MODSWEEP_MIN_SIZE`, `MODSWEEP_OLDER_THAN`, `MODSWEEP_JOBS`,
//! `MODSWEEP_VERBOSE`, `MODSWEEP_QUIET`.
//!
//! ## Exit Status
//!
//! Non-zero only when the root directory cannot be resolved or read. Failed
//! deletions are listed in the summary but do not change the exit status.

use std::io::IsTerminal;

use modsweep::cli::Cli;

fn main() -> miette::Result<()> {
    miette::set_panic_hook();

    // Plain output when stderr is not a terminal (CI, logs, pipes)
    let (theme, context_lines) = if std::io::stderr().is_terminal() {
        (miette::GraphicalTheme::unicode_nocolor(), 3)
    } else {
        (miette::GraphicalTheme::none(), 0)
    };
    miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::GraphicalReportHandler::new()
                .with_theme(theme.clone())
                .with_context_lines(context_lines),
        )
    }))?;

    let cli = Cli::parse_args();

    modsweep::commands::execute(&cli).map_err(Into::into)
}
