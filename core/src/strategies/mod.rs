#![deny(missing_docs)]

//! # Output Strategies
//!
//! A [`DocumentWriter`] serializes a [`RenderedDocument`] for one output
//! format. The renderer knows nothing about formats; the CLI picks a writer
//! and hands the bytes to [`save_document`].

use crate::document::RenderedDocument;
use crate::error::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Word (`.docx`) output.
pub mod docx;
/// Structural JSON dump.
pub mod json;
/// GitHub-flavoured Markdown output.
pub mod markdown;

pub use docx::DocxWriter;
pub use json::JsonWriter;
pub use markdown::MarkdownWriter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Office Open XML word processing document.
    #[default]
    Docx,
    /// Markdown with pipe tables.
    Markdown,
    /// The rendered block structure as JSON.
    Json,
}

impl OutputFormat {
    /// Infers the format from the destination extension, defaulting to `.docx`.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("md") | Some("markdown") => OutputFormat::Markdown,
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Docx,
        }
    }

    /// The writer implementing this format.
    pub fn writer(self) -> Box<dyn DocumentWriter> {
        match self {
            OutputFormat::Docx => Box::new(DocxWriter),
            OutputFormat::Markdown => Box::new(MarkdownWriter),
            OutputFormat::Json => Box::new(JsonWriter),
        }
    }
}

/// A strategy for turning a rendered document into file contents.
pub trait DocumentWriter {
    /// The format this writer produces.
    fn format(&self) -> OutputFormat;

    /// Serializes the whole document in memory.
    fn encode(&self, doc: &RenderedDocument) -> AppResult<Vec<u8>>;
}

/// Encodes `doc` and writes it to `output` in a single write.
///
/// Missing parent directories are created first. Nothing touches the
/// destination until encoding has succeeded.
pub fn save_document(
    doc: &RenderedDocument,
    writer: &dyn DocumentWriter,
    output: &Path,
) -> AppResult<()> {
    let bytes = writer.encode(doc)?;

    let output_err = |source: std::io::Error| AppError::OutputIo {
        path: output.to_path_buf(),
        source,
    };
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(output_err)?;
    }
    fs::write(output, &bytes).map_err(output_err)?;

    tracing::info!(
        ?output,
        format = ?writer.format(),
        bytes = bytes.len(),
        "saved document"
    );
    Ok(())
}
