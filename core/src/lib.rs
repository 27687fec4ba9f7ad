#![deny(missing_docs)]

//! # Apidoc Core
//!
//! Turns a Swagger / OpenAPI description into formatted documentation: one
//! section per endpoint with parameter and response tables, followed by one
//! section per data model with a property table.
//!
//! The pipeline is load ➜ [`render`] ➜ encode ➜ save, see [`generate`].

/// Shared error types.
pub mod error;

/// OpenAPI (OAS) parsing utilities.
pub mod oas;

/// Backend-neutral document model.
pub mod document;

/// Endpoint and model traversal.
pub mod renderer;

/// Output format strategies.
pub mod strategies;

use std::path::Path;

pub use document::{Block, ParagraphStyle, RenderedDocument, Table, TableKind};
pub use error::{AppError, AppResult};
pub use oas::{load_api_description, ApiDescription, SourceFormat};
pub use renderer::render;
pub use strategies::{
    save_document, DocumentWriter, DocxWriter, JsonWriter, MarkdownWriter, OutputFormat,
};

/// Runs the whole pipeline: reads `input`, renders it and writes `output` once.
///
/// Returns the rendered document so callers can report on it.
pub fn generate(
    input: &Path,
    output: &Path,
    writer: &dyn DocumentWriter,
) -> AppResult<RenderedDocument> {
    let api = load_api_description(input)?;
    let doc = render(&api);
    save_document(&doc, writer, output)?;
    Ok(doc)
}
