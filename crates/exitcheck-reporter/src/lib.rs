//! Result reporting for exit check runs.
//!
//! A caller builds an [`ErrorMessageTable`], runs its own checks, collects
//! failing exit codes, then uses this crate once to:
//! - emit `[ERROR]` / `[DEBUG]` / `[RESULT]` lines ([`Reporter`])
//! - persist the validation result document ([`ResultWriter`],
//!   [`write_success_result`], [`write_failure_result`])

mod emit;
mod log;
mod model;
mod writer;

pub use exitcheck_utils::messages::{ErrorMessageTable, Placeholder};
pub use exitcheck_utils::types::{FailedValidation, OverallStatus, ResultFormat, ValidationResult};
pub use log::{format_log_line, format_result_line};
pub use model::{Reporter, ResultWriter, Severity};
pub use writer::{write_failure_result, write_success_result};

/// Look up the message for `code`, falling back to `Unknown error code: {code}`.
///
/// This is the lookup used for `[RESULT]` lines. Result documents use the
/// shorter `Unknown error` placeholder instead; see [`Placeholder`].
#[must_use]
pub fn lookup_message(table: &ErrorMessageTable, code: i32) -> String {
    table.lookup_message(code, Placeholder::WithCode).into_owned()
}
