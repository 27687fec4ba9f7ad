#![deny(missing_docs)]

//! # Logging
//!
//! Installs a `tracing` subscriber writing to stderr. stdout stays free for
//! the command's own report.

use crate::error::{CliError, CliResult};
use tracing_subscriber::EnvFilter;

/// Maps `-q` / `-v` flags to a default filter directive.
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the flag-derived level.
pub fn init(verbose: u8, quiet: bool) -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
