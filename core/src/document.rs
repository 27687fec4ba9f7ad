#![deny(missing_docs)]

//! # Rendered Document
//!
//! Backend-neutral representation of the generated documentation. The
//! renderer appends blocks in traversal order; writers in
//! [`crate::strategies`] turn the finished value into bytes.

use serde::Serialize;

/// Background fill of every table header cell (light blue).
pub const HEADER_FILL: &str = "BDD6EE";

/// Font size of table header text, in points.
pub const HEADER_FONT_SIZE_PT: usize = 10;

/// Visual role of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphStyle {
    /// Plain body text.
    Body,
    /// A paragraph styled like a level-3 heading (operation summaries).
    Subheading,
}

/// The three table shapes the renderer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    /// Operation parameters.
    Parameters,
    /// Operation responses.
    Responses,
    /// Model properties.
    Properties,
}

impl TableKind {
    /// Header cells for this kind of table.
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            TableKind::Parameters => &["Name", "In", "Type", "Description", "Required"],
            TableKind::Responses => &["HTTP Code", "Description", "Schema"],
            TableKind::Properties => &["Property", "Type", "Description"],
        }
    }

    /// Column width hints, in inches.
    pub fn column_widths(self) -> &'static [f32] {
        match self {
            TableKind::Parameters => &[1.5, 1.0, 1.0, 3.0, 1.0],
            TableKind::Responses => &[1.5, 3.0, 3.0],
            TableKind::Properties => &[2.0, 2.0, 4.0],
        }
    }
}

/// A table with a styled header row and plain data rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    /// Which table this is.
    pub kind: TableKind,
    /// Header cells.
    pub header: Vec<String>,
    /// Width hint per column, in inches.
    pub widths: Vec<f32>,
    /// Data rows, each with one cell per header column.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the header and widths of `kind`.
    pub fn new(kind: TableKind) -> Self {
        Self {
            kind,
            header: kind.headers().iter().map(|h| h.to_string()).collect(),
            widths: kind.column_widths().to_vec(),
            rows: Vec::new(),
        }
    }

    /// Appends a data row.
    ///
    /// Rows are normalized to the header width: missing cells are filled
    /// with `"-"`, surplus cells are dropped.
    pub fn push_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.header.len(), "-".to_string());
        self.rows.push(cells);
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.header.len()
    }
}

/// One contiguous piece of output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum Block {
    /// A heading of the given level (1-based).
    Heading {
        /// Heading level; 1 is the document title.
        level: u8,
        /// Heading text.
        text: String,
    },
    /// A paragraph.
    Paragraph {
        /// Paragraph text (may be empty).
        text: String,
        /// Visual role.
        style: ParagraphStyle,
    },
    /// A table.
    Table(Table),
}

/// The append-only document built by a single render pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderedDocument {
    blocks: Vec<Block>,
}

impl RenderedDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a heading.
    pub fn push_heading(&mut self, level: u8, text: impl Into<String>) {
        self.blocks.push(Block::Heading {
            level,
            text: text.into(),
        });
    }

    /// Appends a paragraph.
    pub fn push_paragraph(&mut self, text: impl Into<String>, style: ParagraphStyle) {
        self.blocks.push(Block::Paragraph {
            text: text.into(),
            style,
        });
    }

    /// Appends a table.
    pub fn push_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    /// All blocks in output order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True when nothing has been rendered.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// `(level, text)` of every heading, in order.
    pub fn headings(&self) -> Vec<(u8, &str)> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading { level, text } => Some((*level, text.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Every table, in order.
    pub fn tables(&self) -> Vec<&Table> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Table(table) => Some(table),
                _ => None,
            })
            .collect()
    }
}
