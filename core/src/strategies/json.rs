#![deny(missing_docs)]

//! # JSON Writer
//!
//! Dumps the block structure itself. Handy for diffing two runs or feeding
//! another renderer.

use crate::document::RenderedDocument;
use crate::error::{AppError, AppResult};
use crate::strategies::{DocumentWriter, OutputFormat};

/// Writes the rendered blocks as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter;

impl DocumentWriter for JsonWriter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn encode(&self, doc: &RenderedDocument) -> AppResult<Vec<u8>> {
        let mut bytes =
            serde_json::to_vec_pretty(doc).map_err(|e| AppError::Encode(e.to_string()))?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}
