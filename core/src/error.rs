//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Only I/O and decoding failures are errors. Gaps in the API description
//! (missing summaries, parameters without a type, ...) are rendered with
//! defaults and never reach this type.

use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// The input description could not be read.
    #[from(ignore)]
    #[display("Failed to read input {path:?}: {source}")]
    InputIo {
        /// Location of the input file.
        path: PathBuf,
        /// Underlying cause.
        source: std::io::Error,
    },

    /// The input is not valid JSON/YAML or its top level is not an object.
    ///
    /// `line` and `column` are 1-based; `0` means the decoder gave no location.
    #[from(ignore)]
    #[display("Failed to parse input {path:?} at line {line}, column {column}: {message}")]
    InputParse {
        /// Location of the input file (empty when parsing an in-memory string).
        path: PathBuf,
        /// Decoder message.
        message: String,
        /// 1-based line of the failure.
        line: usize,
        /// 1-based column of the failure.
        column: usize,
    },

    /// The rendered document could not be written.
    #[from(ignore)]
    #[display("Failed to write output {path:?}: {source}")]
    OutputIo {
        /// Destination of the document.
        path: PathBuf,
        /// Underlying cause.
        source: std::io::Error,
    },

    /// The output backend failed to serialize the document.
    #[display("Failed to encode document: {_0}")]
    Encode(String),
}

impl AppError {
    /// Attaches the input file location to a parse error produced from a string.
    pub fn with_input_path(self, input: impl Into<PathBuf>) -> Self {
        match self {
            AppError::InputParse {
                message,
                line,
                column,
                ..
            } => AppError::InputParse {
                path: input.into(),
                message,
                line,
                column,
            },
            other => other,
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::InputIo { source, .. } | AppError::OutputIo { source, .. } => Some(source),
            AppError::InputParse { .. } | AppError::Encode(_) => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::InputParse {
            path: PathBuf::new(),
            message: e.to_string(),
            line: e.line(),
            column: e.column(),
        }
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        let (line, column) = e
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((0, 0));
        AppError::InputParse {
            path: PathBuf::new(),
            message: e.to_string(),
            line,
            column,
        }
    }
}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
