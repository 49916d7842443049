//! CLI entry point and dispatch logic
//!
//! This module owns the `run()` function which:
//! - Parses CLI arguments and initialises diagnostics
//! - Builds CliArgs and discovers Config
//! - Dispatches to command handlers
//! - Handles all error output

use anyhow::Result;
use clap::Parser;
use std::io;

use exitcheck_config::{CliArgs, Config};
use exitcheck_reporter::Reporter;
use exitcheck_utils::error::ExitCheckError;
use exitcheck_utils::exit_codes::ExitCode;
use exitcheck_utils::logging::init_tracing;

use super::args::{Cli, Commands};
use super::commands::{self, ShowSource};

/// Main CLI execution function.
///
/// This function handles ALL output including errors. It returns
/// `Result<(), ExitCode>`:
/// - `Ok(())` when the command succeeded and any result involved PASSED
/// - `Err(code)` otherwise, after printing whatever needed printing
///
/// main.rs only calls `std::process::exit(code.as_i32())` on error.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("✗ Failed to initialise logging: {e}");
    }

    let cli_args = CliArgs {
        config_path: cli.config.clone(),
        results_path: cli.results.clone(),
        messages_path: cli.messages.clone(),
        format: cli.format,
        verbose: cli.verbose,
    };

    let config = match Config::discover(&cli_args) {
        Ok(config) => config,
        Err(err) => return Err(report_error(&err, "config")),
    };

    let operation = cli.command.name();
    match dispatch(cli.command, &config) {
        Ok(code) if code == ExitCode::SUCCESS => Ok(()),
        Ok(code) => Err(code),
        Err(err) => Err(report_error(&err, operation)),
    }
}

/// Run one command against the process streams.
fn dispatch(command: Commands, config: &Config) -> Result<ExitCode> {
    let mut reporter = Reporter::stdio();
    let mut stdout = io::stdout();

    match command {
        Commands::Pass => commands::execute_pass_command(config),
        Commands::Fail { codes } => commands::execute_fail_command(&codes, config, &mut reporter),
        Commands::Record { codes } => {
            commands::execute_record_command(&codes, config, &mut reporter)
        }
        Commands::Lookup { code } => commands::execute_lookup_command(code, config, &mut stdout),
        Commands::Log { level, message } => {
            commands::execute_log_command(level, &message, &mut reporter)
        }
        Commands::Show { path, raw, json } => {
            let source = if raw {
                ShowSource::Captured(io::stdin().lock())
            } else {
                ShowSource::File(path.as_deref().unwrap_or(config.results.path.as_path()))
            };
            commands::execute_show_command(source, json, config, &mut stdout)
        }
        Commands::Config { json } => commands::execute_config_command(json, config, &mut stdout),
    }
}

/// Print an error report to stderr and pick the exit code.
///
/// Library errors carry their own message, context and suggestions; anything
/// else is reported as unexpected.
fn report_error(error: &anyhow::Error, operation: &str) -> ExitCode {
    if let Some(exitcheck_error) = error.downcast_ref::<ExitCheckError>() {
        tracing::debug!(operation, error = %format!("{error:#}"), "command failed");
        eprint!("{}", exitcheck_error.display_for_user());
        return exitcheck_error.to_exit_code();
    }

    eprintln!("✗ Unexpected error during {operation}: {error:#}");
    eprintln!("\n  General troubleshooting:");
    eprintln!("    - Run with --verbose for more detailed output");
    eprintln!("    - Check that the results path is writable");
    ExitCode::INTERNAL
}
