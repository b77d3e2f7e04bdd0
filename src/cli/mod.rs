//! Command-line interface for the `bl` binary.
//!
//! `bl <file>` checks that a source file parses. `bl fmt <path>` rewrites
//! files into the canonical layout (or verifies it with `--check`). The
//! hidden-ish `--lex` and `--parse` flags dump the front-end stages for
//! debugging.
//!
//! Command implementations live in [`commands`] and report failures by
//! returning `CliResult`; the process exits in exactly one place, [`run`].

// No panicking escape hatches in the CLI; failures travel as CliResult
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

/// Process exit code carried through `CliResult`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// A command failure: what to print, and how to exit.
///
/// An empty message exits silently with the code, for commands that have
/// already printed their own report.
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Shorthand for a plain exit-code-1 failure.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The BL language front end
#[derive(Parser, Debug)]
#[command(name = "bl", version = VERSION)]
#[command(about = "Parser and formatter for the BL language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Source file to syntax-check (the default action)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Dump the token stream instead of checking (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Dump the syntax tree instead of checking (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rewrite BL sources into the canonical layout
    Fmt {
        /// File to format, or a directory to search for .bl files
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
        /// Report files that would change, without writing
        #[arg(long)]
        check: bool,
        /// Print the changed lines instead of writing
        #[arg(long)]
        diff: bool,
    },
}

/// Parse arguments, dispatch, exit.
///
/// The sole `process::exit` call site; everything below it returns
/// `CliResult` instead.
pub fn run() {
    let code = match dispatch(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            if !err.message.is_empty() {
                eprintln!("{err}");
            }
            err.exit_code
        }
    };
    if code != ExitCode::SUCCESS {
        process::exit(code.0);
    }
}

fn dispatch(cli: Cli) -> CliResult<ExitCode> {
    // Debug flags short-circuit the normal actions.
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy());
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file.to_string_lossy());
    }

    match (cli.command, cli.file) {
        (Some(Command::Fmt { path, check, diff }), _) => {
            commands::format_files(&path.to_string_lossy(), check, diff)
        }
        (None, Some(file)) => commands::check_file(&file.to_string_lossy()),
        (None, None) => Err(CliError::failure("Usage: bl <FILE> (see --help)")),
    }
}
