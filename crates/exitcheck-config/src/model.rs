use camino::Utf8PathBuf;
use serde::Deserialize;
use std::collections::HashMap;

use exitcheck_utils::messages::ErrorMessageTable;
use exitcheck_utils::types::{ConfigSource, ResultFormat};

/// Where result documents land unless configured otherwise.
pub const DEFAULT_RESULTS_PATH: &str = "/tmp/exit_check_validation_results.json";

/// Environment variable overriding the results path.
pub const RESULTS_PATH_ENV: &str = "EXITCHECK_RESULTS_PATH";

/// Configuration for exitcheck operations.
///
/// # Configuration File Format
///
/// ```toml
/// [results]
/// path = "/tmp/exit_check_validation_results.json"
/// format = "pretty"
///
/// [messages]
/// 4 = "bad input"
/// 7 = "timeout"
/// ```
///
/// Each effective value records its source in `source_attribution` (keys
/// `results_path`, `format`, `messages`).
#[derive(Debug, Clone)]
pub struct Config {
    pub results: ResultsConfig,
    /// Exit code → message table handed to the reporter.
    pub messages: ErrorMessageTable,
    pub verbose: bool,
    pub source_attribution: HashMap<String, ConfigSource>,
}

/// `[results]` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsConfig {
    pub path: Utf8PathBuf,
    pub format: ResultFormat,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            path: Utf8PathBuf::from(DEFAULT_RESULTS_PATH),
            format: ResultFormat::default(),
        }
    }
}

/// `[results]` as written in the file: every key optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileResults {
    pub path: Option<String>,
    pub format: Option<ResultFormat>,
}

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config_path: Option<Utf8PathBuf>,
    pub results_path: Option<Utf8PathBuf>,
    pub messages_path: Option<Utf8PathBuf>,
    pub format: Option<ResultFormat>,
    pub verbose: bool,
}
