//! Log command implementation

use anyhow::Result;
use std::io::Write;

use exitcheck_reporter::Reporter;
use exitcheck_utils::exit_codes::ExitCode;

use crate::cli::args::LogLevel;

/// Write one `[ERROR]` (stderr) or `[DEBUG]` (stdout) line.
pub fn execute_log_command<O: Write, E: Write>(
    level: LogLevel,
    message: &[String],
    reporter: &mut Reporter<O, E>,
) -> Result<ExitCode> {
    match level {
        LogLevel::Error => reporter.log_error(message),
        LogLevel::Debug => reporter.log_debug(message),
    }
    Ok(ExitCode::SUCCESS)
}
