//! Show command implementation
//!
//! Reads a result document back and prints either a summary or the parsed
//! document as JSON. The exit status mirrors the result: 0 for PASSED,
//! `VALIDATION_FAILED` for anything else.

use anyhow::{Context, Result};
use camino::Utf8Path;
use std::io::{Read, Write};

use exitcheck_config::Config;
use exitcheck_results::{ResultDocument, parse_captured_output, read_result_file};
use exitcheck_utils::canonicalization;
use exitcheck_utils::exit_codes::ExitCode;

/// Where `show` reads the document from
pub enum ShowSource<'a, R> {
    /// A result file on the local filesystem
    File(&'a Utf8Path),
    /// Captured shell output, e.g. piped from `ssh host cat <results>`
    Captured(R),
}

/// Execute the show command
pub fn execute_show_command<R: Read>(
    source: ShowSource<'_, R>,
    json: bool,
    config: &Config,
    out: &mut impl Write,
) -> Result<ExitCode> {
    let document = match source {
        ShowSource::File(path) => {
            tracing::debug!(path = %path, "reading result file");
            read_result_file(path)?
        }
        ShowSource::Captured(mut input) => {
            let mut raw = String::new();
            input
                .read_to_string(&mut raw)
                .context("Failed to read captured output from stdin")?;
            parse_captured_output(&raw, config.results.path.as_str())?
        }
    };

    if json {
        let rendered = canonicalization::emit(&document, config.results.format)
            .context("Failed to emit result JSON")?;
        writeln!(out, "{rendered}")?;
    } else {
        write_summary(&document, out)?;
    }

    Ok(if document.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::VALIDATION_FAILED
    })
}

fn write_summary(document: &ResultDocument, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", document.summary_line())?;
    if let Some(details) = document.failure_details() {
        writeln!(out, "{details}")?;
    }
    Ok(())
}
