#![deny(missing_docs)]

//! # Markdown Writer
//!
//! Emits GitHub-flavoured Markdown. Column widths and header shading have
//! no Markdown equivalent and are dropped.

use crate::document::{Block, ParagraphStyle, RenderedDocument, Table};
use crate::error::AppResult;
use crate::strategies::{DocumentWriter, OutputFormat};
use std::fmt::Write as _;

/// Writes `.md` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownWriter;

impl DocumentWriter for MarkdownWriter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }

    fn encode(&self, doc: &RenderedDocument) -> AppResult<Vec<u8>> {
        Ok(to_markdown(doc).into_bytes())
    }
}

/// Renders the document as a Markdown string.
pub fn to_markdown(doc: &RenderedDocument) -> String {
    let mut out = String::new();
    for block in doc.blocks() {
        match block {
            Block::Heading { level, text } => {
                let _ = writeln!(out, "{} {}\n", "#".repeat(usize::from(*level).max(1)), text);
            }
            Block::Paragraph {
                text,
                style: ParagraphStyle::Subheading,
            } => {
                // An empty `****` would render literally.
                if !text.is_empty() {
                    let _ = writeln!(out, "**{}**\n", text);
                }
            }
            Block::Paragraph {
                text,
                style: ParagraphStyle::Body,
            } => {
                let _ = writeln!(out, "{}\n", text);
            }
            Block::Table(table) => write_table(&mut out, table),
        }
    }
    out
}

fn write_table(out: &mut String, table: &Table) {
    out.push_str(&table_line(table.header.iter().map(|h| escape_cell(h))));
    out.push_str(&table_line(table.header.iter().map(|_| "---".to_string())));
    for row in &table.rows {
        out.push_str(&table_line(row.iter().map(|c| escape_cell(c))));
    }
    out.push('\n');
}

fn table_line(cells: impl Iterator<Item = String>) -> String {
    format!("| {} |\n", cells.collect::<Vec<_>>().join(" | "))
}

/// Pipes would split the cell and newlines would end the row.
fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|").replace(['\r', '\n'], " ")
}
