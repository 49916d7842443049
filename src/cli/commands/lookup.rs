//! Lookup command implementation

use anyhow::{Context, Result};
use std::io::Write;

use exitcheck_config::Config;
use exitcheck_reporter::lookup_message;
use exitcheck_utils::exit_codes::ExitCode;

/// Print the message for `code`, or the `Unknown error code: N` placeholder.
///
/// An unregistered code is not an error; the command still exits 0.
pub fn execute_lookup_command(code: i32, config: &Config, out: &mut impl Write) -> Result<ExitCode> {
    writeln!(out, "{}", lookup_message(&config.messages, code))
        .context("Failed to write to stdout")?;
    Ok(ExitCode::SUCCESS)
}
