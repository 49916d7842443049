//! CLI command implementations (facade).
//!
//! This module re-exports the command surface used by `run.rs` and CLI tests.
//! Implementations live in `commands/*`. Handlers take their output streams
//! as arguments so tests can capture them.

mod config;
mod json_emit;
mod log;
mod lookup;
mod record;
mod show;

pub use config::execute_config_command;
pub use log::execute_log_command;
pub use lookup::execute_lookup_command;
pub use record::{execute_fail_command, execute_pass_command, execute_record_command};
pub use show::{ShowSource, execute_show_command};
