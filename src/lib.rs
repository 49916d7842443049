//! exitcheck - result reporting for exit check validation scripts
//!
//! An exit check run executes a set of external checks, collects the exit
//! codes of the ones that failed, and then hands them to this crate once to:
//!
//! - emit fixed-format log lines (`[ERROR]`, `[DEBUG]`, `[RESULT]`) that log
//!   scrapers pick up
//! - persist a machine-readable JSON result document at a well-known path
//!
//! The document is later read back (often through a remote shell) with the
//! lenient reader in [`results`].
//!
//! # Quick Start (CLI)
//!
//! ```bash
//! # Record a pass
//! exitcheck pass
//!
//! # Record failures for check exit codes 4 and 7 (exits 3)
//! exitcheck fail --code 4 --code 7
//!
//! # Inspect the persisted result
//! exitcheck show
//! ```
//!
//! # Quick Start (Library)
//!
//! ```rust,no_run
//! use exitcheck::{ErrorMessageTable, Reporter, ResultWriter};
//!
//! let table = ErrorMessageTable::from_iter([(4, "bad input"), (7, "timeout")]);
//! let failing = [4, 7];
//!
//! let mut reporter = Reporter::stdio();
//! for &code in &failing {
//!     reporter.report_failure(code, &table);
//! }
//! ResultWriter::new("/tmp/exit_check_validation_results.json")
//!     .write_failure(&failing, &table)?;
//! # Ok::<(), exitcheck::ExitCheckError>(())
//! ```
//!
//! # Stable Public API
//!
//! - [`Reporter`], [`ResultWriter`], [`ErrorMessageTable`], [`ValidationResult`]
//! - [`lookup_message`], [`write_success_result`], [`write_failure_result`]
//! - [`ResultDocument`] and the reader functions in [`results`]
//! - [`Config`], [`CliArgs`], [`ExitCode`], [`ExitCheckError`]
//!
//! Everything under [`cli`] is internal to the binary.

pub mod cli;

pub use exitcheck_config::{CliArgs, Config, ConfigSource, DEFAULT_RESULTS_PATH};
pub use exitcheck_reporter::{
    ErrorMessageTable, FailedValidation, OverallStatus, Placeholder, Reporter, ResultFormat,
    ResultWriter, Severity, ValidationResult, lookup_message, write_failure_result,
    write_success_result,
};
pub use exitcheck_results::ResultDocument;
pub use exitcheck_utils::canonicalization::emit_jcs;
pub use exitcheck_utils::error::{ConfigError, ExitCheckError, UserFriendlyError};
pub use exitcheck_utils::exit_codes::ExitCode;

/// Reading persisted results back.
pub mod results {
    pub use exitcheck_results::*;
}
