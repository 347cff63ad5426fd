//! CLI module for the gdcpp transpiler
//!
//! ## Commands
//!
//! - `build <events.json> [output]` - Write `<output>.hpp` and `<output>.cpp`
//! - `emit <events.json>` - Print the generated header and/or source
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
use tracing_subscriber::EnvFilter;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
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

/// GDScript to godot-cpp transpiler
#[derive(Parser, Debug)]
#[command(name = "gdcpp")]
#[command(version = VERSION)]
#[command(about = "Generate godot-cpp classes from GDScript event logs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Translate script floats to C++ `float` instead of `double`
    #[arg(long = "use-floats", global = true)]
    pub use_floats: bool,

    /// Log every emitted fragment
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the generated header and source next to each other
    Build {
        /// Event log produced by the parser
        #[arg(value_name = "EVENTS")]
        file: PathBuf,
        /// Output base name (default: the event log path without extension)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Print the generated files to stdout
    Emit {
        /// Event log produced by the parser
        #[arg(value_name = "EVENTS")]
        file: PathBuf,
        /// Print only the header
        #[arg(long, conflicts_with = "source")]
        header: bool,
        /// Print only the source
        #[arg(long)]
        source: bool,
    },
}

/// Which generated files `emit` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitTarget {
    Both,
    Header,
    Source,
}

impl EmitTarget {
    fn from_flags(header: bool, source: bool) -> Self {
        match (header, source) {
            (true, _) => EmitTarget::Header,
            (_, true) => EmitTarget::Source,
            _ => EmitTarget::Both,
        }
    }
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
    init_tracing(cli.verbose);

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

/// Initialize structured logging with env-based filter, defaulting to info (trace with `--verbose`)
fn init_tracing(verbose: bool) {
    let default = if verbose { "trace" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .try_init();
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Build { file, output } => commands::build_file(&file, output.as_deref(), cli.use_floats),
        Command::Emit { file, header, source } => {
            commands::emit_file(&file, EmitTarget::from_flags(header, source), cli.use_floats)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
