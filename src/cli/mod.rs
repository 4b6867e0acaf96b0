//! CLI module for the test skeleton generator
//!
//! ## Commands
//!
//! - `generate <INPUT_DIR> <OUTPUT_DIR> <MAX_READ> <MAX_WRITE> <MAX_PARSE> [STYLE]` - Run the pipeline over a
//!   directory tree
//! - `emit <FILE>` - Print the generated test classes for one file
//! - `classes <FILE>` - Print the classes extracted from one file (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::pipeline::config::DEFAULT_EXTENSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// Invalid arguments or configuration.
    pub const USAGE: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create a configuration error (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::USAGE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate NUnit, xUnit or MSTest skeletons for C# classes
#[derive(Parser, Debug)]
#[command(name = "testgen")]
#[command(version = VERSION)]
#[command(about = "Generate test skeleton classes for C# sources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate one test file per class for every source file under a directory
    Generate {
        /// Root directory scanned recursively for sources
        #[arg(value_name = "INPUT_DIR")]
        input_dir: PathBuf,
        /// Directory receiving the generated files (recreated empty)
        #[arg(value_name = "OUTPUT_DIR")]
        output_dir: PathBuf,
        /// Files read concurrently
        #[arg(value_name = "MAX_READ", allow_negative_numbers = true)]
        max_read: i64,
        /// Files written concurrently
        #[arg(value_name = "MAX_WRITE", allow_negative_numbers = true)]
        max_write: i64,
        /// Files parsed and synthesized concurrently
        #[arg(value_name = "MAX_PARSE", allow_negative_numbers = true)]
        max_parse: i64,
        /// 1 = NUnit, 2 = xUnit, 3 = MSTest
        #[arg(value_name = "STYLE", default_value_t = 1, allow_negative_numbers = true)]
        style: i64,
        /// Source and output file extension
        #[arg(long, default_value = DEFAULT_EXTENSION)]
        ext: String,
        /// Spaces per indentation level in generated files
        #[arg(long, value_name = "N", default_value_t = 4)]
        indent: usize,
        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the generated test classes for one file
    Emit {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// 1 = NUnit, 2 = xUnit, 3 = MSTest
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        style: i64,
        /// Spaces per indentation level
        #[arg(long, value_name = "N", default_value_t = 4)]
        indent: usize,
    },

    /// Print the classes extracted from one file (debug)
    Classes {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Generate {
            input_dir,
            output_dir,
            max_read,
            max_write,
            max_parse,
            style,
            ext,
            indent,
            json,
        } => {
            let args = commands::GenerateArgs {
                input_dir,
                output_dir,
                max_read,
                max_write,
                max_parse,
                style,
                extension: ext,
                indent,
                json,
            };
            commands::generate(&args)
        }
        Command::Emit { file, style, indent } => commands::emit(&file, style, indent),
        Command::Classes { file } => commands::classes(&file),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_generate() {
        let cli = Cli::try_parse_from(["testgen", "generate", "src", "out", "4", "2", "3"]).unwrap();
        let Command::Generate {
            max_read,
            max_write,
            max_parse,
            style,
            ext,
            json,
            ..
        } = cli.command
        else {
            panic!("Expected Generate command");
        };
        assert_eq!((max_read, max_write, max_parse, style), (4, 2, 3, 1));
        assert_eq!(ext, "cs");
        assert!(!json);
        assert!(matches!(
            Cli::try_parse_from(["testgen", "generate", "src", "out", "1", "1", "1"]).unwrap().command,
            Command::Generate { indent: 4, .. }
        ));
    }

    #[test]
    fn test_cli_parse_generate_with_style_and_flags() {
        let cli = Cli::try_parse_from(["testgen", "generate", "src", "out", "1", "1", "1", "3", "--ext", "csx", "--json"])
            .unwrap();
        if let Command::Generate { style, ext, json, .. } = cli.command {
            assert_eq!(style, 3);
            assert_eq!(ext, "csx");
            assert!(json);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_negative_bound_reaches_validation() {
        let cli = Cli::try_parse_from(["testgen", "generate", "src", "out", "-1", "1", "1"]).unwrap();
        assert!(matches!(cli.command, Command::Generate { max_read: -1, .. }));
    }

    #[test]
    fn test_cli_missing_bounds_is_rejected() {
        assert!(Cli::try_parse_from(["testgen", "generate", "src", "out"]).is_err());
    }

    #[test]
    fn test_cli_parse_emit() {
        let cli = Cli::try_parse_from(["testgen", "emit", "A.cs", "--style", "2"]).unwrap();
        assert!(matches!(cli.command, Command::Emit { style: 2, .. }));
    }

    #[test]
    fn test_cli_parse_indent() {
        let cli = Cli::try_parse_from(["testgen", "generate", "src", "out", "1", "1", "1", "--indent", "2"]).unwrap();
        assert!(matches!(cli.command, Command::Generate { indent: 2, .. }));

        let cli = Cli::try_parse_from(["testgen", "emit", "A.cs", "--indent", "8"]).unwrap();
        assert!(matches!(cli.command, Command::Emit { indent: 8, style: 1, .. }));

        assert!(Cli::try_parse_from(["testgen", "emit", "A.cs", "--indent", "-1"]).is_err());
    }

    #[test]
    fn test_cli_parse_classes() {
        let cli = Cli::try_parse_from(["testgen", "classes", "A.cs"]).unwrap();
        assert!(matches!(cli.command, Command::Classes { .. }));
    }

    #[test]
    fn test_cli_error_exit_codes() {
        assert_eq!(CliError::failure("x").exit_code, ExitCode::FAILURE);
        assert_eq!(CliError::usage("x").exit_code, ExitCode::USAGE);
    }
}
