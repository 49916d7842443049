//! CLI argument definitions and parsing structures
//!
//! This module defines the command-line interface structure using clap,
//! including the main `Cli` struct and the subcommand enum.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};

use exitcheck_utils::types::ResultFormat;

/// exitcheck - report exit check results as log lines and a JSON document
#[derive(Parser, Debug)]
#[command(name = "exitcheck")]
#[command(about = "Report exit check validation results as log lines and a JSON result file")]
#[command(long_about = r#"
exitcheck is the reporting tail of an exit check script. The script runs its
checks, collects the exit codes of the failing ones, and calls exitcheck once
to print [RESULT] lines and persist a JSON result document.

EXAMPLES:
  # All checks passed
  exitcheck pass

  # Checks 4 and 7 failed (exits 3)
  exitcheck fail --code 4 --code 7

  # Pass or fail depending on whether any codes were collected
  exitcheck record ${FAILED_CODES[@]/#/--code=}

  # Print the message registered for a code
  exitcheck lookup 4

  # Timestamped log lines
  exitcheck log debug "checking" "version"
  exitcheck log error "disk check failed"

  # Read the result back, from a file or from captured shell output
  exitcheck show
  ssh host sudo cat /tmp/exit_check_validation_results.json | exitcheck show --raw

CONFIGURATION:
  Configuration is loaded with precedence: CLI flags > environment > config file > defaults
  Config file is discovered by searching upward from CWD for .exitcheck/config.toml
  EXITCHECK_RESULTS_PATH overrides the results path from the config file

EXIT STATUS:
  0 success or PASSED, 1 internal error, 2 invalid arguments or configuration,
  3 validation failed, 4 result file missing or malformed
"#)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Path of the JSON result document
    #[arg(long, global = true)]
    pub results: Option<Utf8PathBuf>,

    /// Extra TOML file with a [messages] table, layered over the config file
    #[arg(long, global = true)]
    pub messages: Option<Utf8PathBuf>,

    /// Result document layout: pretty or canonical (RFC 8785)
    #[arg(long, global = true)]
    pub format: Option<ResultFormat>,

    /// Enable verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a PASSED result
    Pass,

    /// Report failing exit codes and record a FAILED result
    Fail {
        /// Failing check exit code (repeatable, or comma-separated)
        #[arg(short = 'c', long = "code", required = true, value_delimiter = ',')]
        codes: Vec<i32>,
    },

    /// Record PASSED when no codes are given, FAILED otherwise
    Record {
        /// Failing check exit code (repeatable, or comma-separated)
        #[arg(short = 'c', long = "code", value_delimiter = ',')]
        codes: Vec<i32>,
    },

    /// Print the message registered for an exit code
    Lookup {
        /// Check exit code
        code: i32,
    },

    /// Write a timestamped [ERROR] or [DEBUG] line
    Log {
        /// Line severity
        #[arg(value_enum)]
        level: LogLevel,

        /// Message words, joined with single spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },

    /// Read a result document and summarise it
    Show {
        /// Result file to read (defaults to the configured results path)
        path: Option<Utf8PathBuf>,

        /// Read captured shell output from stdin instead of a file
        #[arg(long, conflicts_with = "path")]
        raw: bool,

        /// Print the parsed document as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration and where each value came from
    Config {
        /// Output as canonical JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Operation name used in error reports
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail { .. } => "fail",
            Self::Record { .. } => "record",
            Self::Lookup { .. } => "lookup",
            Self::Log { .. } => "log",
            Self::Show { .. } => "show",
            Self::Config { .. } => "config",
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Debug,
}

/// Build the clap command, for tests and shell completion.
#[must_use]
pub fn build_cli() -> clap::Command {
    <Cli as clap::CommandFactory>::command()
}
