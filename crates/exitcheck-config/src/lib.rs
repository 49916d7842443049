//! Configuration management for exitcheck
//!
//! Hierarchical configuration with discovery and precedence:
//! CLI > environment > file > defaults. Configuration files are TOML with
//! optional `[results]` and `[messages]` tables.

mod discovery;
mod messages;
mod model;
mod sources;

pub use messages::{load_message_file, parse_message_table};
pub use model::{CliArgs, Config, DEFAULT_RESULTS_PATH, RESULTS_PATH_ENV, ResultsConfig};
pub use exitcheck_utils::types::ConfigSource;
