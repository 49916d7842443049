use std::fmt::Display;
use std::io::Write;

use exitcheck_utils::messages::ErrorMessageTable;
use exitcheck_utils::timestamp::format_utc;

use super::model::{Reporter, Severity};
use super::lookup_message;

/// `[TAG] <timestamp> <args joined by spaces>`
pub fn format_log_line<I, T>(severity: Severity, timestamp: &str, args: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let message = args
        .into_iter()
        .map(|arg| arg.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} {timestamp} {message}", severity.tag())
}

/// `[RESULT] VALIDATION_FAILED: <code> - <message>`
#[must_use]
pub fn format_result_line(code: i32, message: &str) -> String {
    format!("[RESULT] VALIDATION_FAILED: {code} - {message}")
}

impl<O: Write, E: Write> Reporter<O, E> {
    /// Write an `[ERROR]` line to the error stream.
    pub fn log_error<I, T>(&mut self, args: I)
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        let line = format_log_line(Severity::Error, &format_utc((self.clock)()), args);
        // Stream errors are not surfaced: a broken log pipe must not abort the run.
        let _ = writeln!(self.err, "{line}");
    }

    /// Write a `[DEBUG]` line to the output stream.
    pub fn log_debug<I, T>(&mut self, args: I)
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        let line = format_log_line(Severity::Debug, &format_utc((self.clock)()), args);
        let _ = writeln!(self.out, "{line}");
    }

    /// Write the `[RESULT] VALIDATION_FAILED` line for one failing code to
    /// the output stream.
    pub fn report_failure(&mut self, code: i32, table: &ErrorMessageTable) {
        if table.get(code).is_none() {
            tracing::warn!(exit_code = code, "reporting failure for unregistered exit code");
        }
        let line = format_result_line(code, &lookup_message(table, code));
        let _ = writeln!(self.out, "{line}");
    }
}
