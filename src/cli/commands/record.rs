//! Pass, fail and record command implementations
//!
//! These are the writers of the result document: `pass` records PASSED,
//! `fail` prints one `[RESULT]` line per code and records FAILED, and
//! `record` picks between them based on whether any codes were given.

use anyhow::{Context, Result};
use std::io::Write;

use exitcheck_config::Config;
use exitcheck_reporter::{Reporter, ResultWriter};
use exitcheck_utils::exit_codes::ExitCode;

fn result_writer(config: &Config) -> ResultWriter {
    ResultWriter::new(config.results.path.clone()).with_format(config.results.format)
}

/// Execute the pass command
pub fn execute_pass_command(config: &Config) -> Result<ExitCode> {
    result_writer(config)
        .write_success()
        .with_context(|| format!("Failed to record PASSED result at {}", config.results.path))?;

    tracing::debug!(path = %config.results.path, "recorded PASSED result");
    Ok(ExitCode::SUCCESS)
}

/// Execute the fail command
///
/// The `[RESULT]` lines are printed before the document is written, so a
/// scraper sees them even when the write fails.
pub fn execute_fail_command<O: Write, E: Write>(
    codes: &[i32],
    config: &Config,
    reporter: &mut Reporter<O, E>,
) -> Result<ExitCode> {
    for &code in codes {
        reporter.report_failure(code, &config.messages);
    }

    result_writer(config)
        .write_failure(codes, &config.messages)
        .with_context(|| format!("Failed to record FAILED result at {}", config.results.path))?;

    tracing::debug!(
        path = %config.results.path,
        failures = codes.len(),
        "recorded FAILED result"
    );
    Ok(ExitCode::VALIDATION_FAILED)
}

/// Execute the record command
pub fn execute_record_command<O: Write, E: Write>(
    codes: &[i32],
    config: &Config,
    reporter: &mut Reporter<O, E>,
) -> Result<ExitCode> {
    if codes.is_empty() {
        execute_pass_command(config)
    } else {
        execute_fail_command(codes, config, reporter)
    }
}
