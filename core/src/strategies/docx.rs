#![deny(missing_docs)]

//! # DOCX Writer
//!
//! Builds a Word document with `docx-rs`. Headings use the `HeadingN`
//! paragraph styles, operation summaries reuse `Heading3`, and every table
//! gets a shaded bold header row and a fixed column grid.

use crate::document::{
    Block, ParagraphStyle, RenderedDocument, Table, HEADER_FILL, HEADER_FONT_SIZE_PT,
};
use crate::error::{AppError, AppResult};
use crate::strategies::{DocumentWriter, OutputFormat};
use docx_rs::{
    Docx, Paragraph, Run, Shading, Style, StyleType, Table as DocxTable, TableCell, TableRow,
    WidthType,
};
use std::io::Cursor;

/// Twentieths of a point per inch.
const DXA_PER_INCH: f32 = 1440.0;

/// `(level, display name, size in half-points, color)` of the heading styles.
const HEADING_STYLES: [(u8, &str, usize, &str); 3] = [
    (1, "Heading 1", 32, "2F5496"),
    (2, "Heading 2", 26, "2F5496"),
    (3, "Heading 3", 24, "1F3763"),
];

/// Writes `.docx` packages.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxWriter;

impl DocumentWriter for DocxWriter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Docx
    }

    fn encode(&self, doc: &RenderedDocument) -> AppResult<Vec<u8>> {
        let mut docx = HEADING_STYLES
            .iter()
            .fold(Docx::new(), |docx, (level, name, size, color)| {
                docx.add_style(
                    Style::new(heading_style_id(*level), StyleType::Paragraph)
                        .name(*name)
                        .size(*size)
                        .color(*color)
                        .bold(),
                )
            });

        for block in doc.blocks() {
            docx = match block {
                Block::Heading { level, text } => {
                    docx.add_paragraph(styled_paragraph(text, &heading_style_id(*level)))
                }
                Block::Paragraph {
                    text,
                    style: ParagraphStyle::Subheading,
                } => docx.add_paragraph(styled_paragraph(text, &heading_style_id(3))),
                Block::Paragraph {
                    text,
                    style: ParagraphStyle::Body,
                } => docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(text))),
                Block::Table(table) => docx.add_table(build_table(table)),
            };
        }

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| AppError::Encode(e.to_string()))?;
        Ok(buffer.into_inner())
    }
}

/// Word only ships styles for a handful of heading levels; deeper levels
/// collapse onto the last one.
fn heading_style_id(level: u8) -> String {
    format!("Heading{}", level.clamp(1, 3))
}

fn styled_paragraph(text: &str, style_id: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(text))
        .style(style_id)
}

fn build_table(table: &Table) -> DocxTable {
    let widths: Vec<usize> = table.widths.iter().map(|w| inches_to_dxa(*w)).collect();

    let header = TableRow::new(
        table
            .header
            .iter()
            .zip(&widths)
            .map(|(text, width)| {
                let run = Run::new()
                    .add_text(text)
                    .bold()
                    .size(HEADER_FONT_SIZE_PT * 2);
                TableCell::new()
                    .add_paragraph(Paragraph::new().add_run(run))
                    .width(*width, WidthType::Dxa)
                    .shading(Shading::new().fill(HEADER_FILL))
            })
            .collect(),
    );

    let body = table.rows.iter().map(|row| {
        TableRow::new(
            row.iter()
                .zip(&widths)
                .map(|(text, width)| {
                    TableCell::new()
                        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
                        .width(*width, WidthType::Dxa)
                })
                .collect(),
        )
    });

    DocxTable::new(std::iter::once(header).chain(body).collect()).set_grid(widths)
}

fn inches_to_dxa(inches: f32) -> usize {
    (inches * DXA_PER_INCH).round() as usize
}
