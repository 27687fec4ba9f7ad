#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use apidoc_core::AppError;
use derive_more::{Display, From};

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// Failure inside the load/render/save pipeline.
    #[display("{}", _0)]
    App(AppError),

    /// The logging subscriber could not be installed.
    #[from(ignore)]
    #[display("Logging setup failed: {}", _0)]
    Logging(String),
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::App(e) => Some(e),
            CliError::Logging(_) => None,
        }
    }
}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
