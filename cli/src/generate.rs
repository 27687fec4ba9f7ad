#![deny(missing_docs)]

//! # Generate Command
//!
//! Reads the API description, renders it and writes the document once.

use std::path::PathBuf;

use apidoc_core::{generate, OutputFormat};

use crate::error::CliResult;

/// Output format as accepted on the command line.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// Word document.
    Docx,
    /// Markdown.
    Markdown,
    /// Rendered block structure as JSON.
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Docx => OutputFormat::Docx,
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the Swagger / OpenAPI description (JSON, or YAML by extension).
    #[clap(long, short = 'i', env = "APIDOC_INPUT", default_value = "swagger.json")]
    pub input_path: PathBuf,

    /// Destination of the generated document.
    #[clap(long, short = 'o', env = "APIDOC_OUTPUT", default_value = "swagger_updated.docx")]
    pub output_path: PathBuf,

    /// Output format. Inferred from the output extension when omitted.
    #[clap(long, short = 'f', env = "APIDOC_FORMAT", value_enum)]
    pub format: Option<FormatArg>,
}

impl GenerateArgs {
    /// The effective output format.
    pub fn output_format(&self) -> OutputFormat {
        self.format
            .map(OutputFormat::from)
            .unwrap_or_else(|| OutputFormat::from_path(&self.output_path))
    }
}

/// Executes the generation.
pub fn execute(args: &GenerateArgs) -> CliResult<()> {
    let format = args.output_format();
    tracing::debug!(input = ?args.input_path, output = ?args.output_path, ?format, "starting");

    let writer = format.writer();
    let doc = generate(&args.input_path, &args.output_path, writer.as_ref())?;

    println!(
        "Generated {} ({} blocks, {} tables) at {:?}",
        match format {
            OutputFormat::Docx => "DOCX",
            OutputFormat::Markdown => "Markdown",
            OutputFormat::Json => "JSON",
        },
        doc.len(),
        doc.tables().len(),
        args.output_path
    );

    Ok(())
}
