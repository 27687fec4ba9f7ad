#![deny(missing_docs)]

//! # Apidoc CLI
//!
//! Converts a Swagger / OpenAPI description into formatted API documentation.
//!
//! With no arguments it reads `swagger.json` and writes `swagger_updated.docx`
//! in the current directory.

use std::process::ExitCode;

use clap::Parser;

use crate::error::CliResult;

mod error;
mod generate;
mod logging;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI / Swagger documentation generator")]
struct Cli {
    #[clap(flatten)]
    generate: generate::GenerateArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[clap(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[clap(long, short = 'q', conflicts_with = "verbose")]
    quiet: bool,
}

fn run(cli: &Cli) -> CliResult<()> {
    logging::init(cli.verbose, cli.quiet)?;
    generate::execute(&cli.generate)
}

/// Maps the outcome to the process status, printing the diagnostic on failure.
fn exit_code(result: CliResult<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "generation failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    exit_code(run(&cli))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use apidoc_core::AppError;
    use std::ffi::OsStr;
    use std::path::PathBuf;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_need_no_arguments() {
        let cli = Cli::try_parse_from(["apidoc"]).unwrap();
        // Env vars may override defaults on a developer machine.
        if std::env::var_os("APIDOC_INPUT").is_none() {
            assert_eq!(cli.generate.input_path, PathBuf::from("swagger.json"));
        }
        if std::env::var_os("APIDOC_OUTPUT").is_none() {
            assert_eq!(cli.generate.output_path, PathBuf::from("swagger_updated.docx"));
        }
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from([
            "apidoc", "-i", "api.yaml", "-o", "out/api.md", "--format", "markdown", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.generate.input_path, PathBuf::from("api.yaml"));
        assert_eq!(cli.generate.format, Some(generate::FormatArg::Markdown));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_run_fails_on_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.json");
        let output = dir.path().join("api.docx");
        let cli = Cli::try_parse_from([
            OsStr::new("apidoc"),
            OsStr::new("-q"),
            OsStr::new("-i"),
            input.as_os_str(),
            OsStr::new("-o"),
            output.as_os_str(),
        ])
        .unwrap();

        let err = run(&cli).unwrap_err();
        assert!(matches!(err, CliError::App(AppError::InputIo { .. })));
        assert!(format!("{err}").contains("missing.json"));
        assert!(!output.exists());
    }

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(exit_code(Ok(())), ExitCode::SUCCESS);
        let err = CliError::App(AppError::Encode("zip failed".into()));
        assert_eq!(exit_code(Err(err)), ExitCode::FAILURE);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["apidoc", "-q", "-v"]).is_err());
    }
}
