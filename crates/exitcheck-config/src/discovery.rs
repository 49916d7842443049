use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use exitcheck_utils::error::{ConfigError, ExitCheckError};
use exitcheck_utils::messages::ErrorMessageTable;
use exitcheck_utils::types::ConfigSource;

use crate::messages::{load_message_file, parse_message_table};
use crate::model::{CliArgs, Config, FileResults, RESULTS_PATH_ENV, ResultsConfig};

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    results: Option<FileResults>,
    messages: Option<BTreeMap<String, String>>,
}

impl Config {
    /// Discover and load configuration with precedence: CLI > env > file > defaults
    ///
    /// Uses the current working directory for config file discovery when no
    /// explicit path is provided in `cli_args`.
    pub fn discover(cli_args: &CliArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let start_dir = Utf8PathBuf::from_path_buf(cwd)
            .map_err(|p| anyhow::anyhow!("Current directory is not UTF-8: {}", p.display()))?;
        Self::discover_from(&start_dir, cli_args, |key| std::env::var(key).ok())
    }

    /// Discover configuration starting from a specific directory.
    ///
    /// This is the path-driven variant used by tests to avoid process-global
    /// state; `env` stands in for `std::env::var`.
    pub fn discover_from(
        start_dir: &Utf8Path,
        cli_args: &CliArgs,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut source_attribution = HashMap::new();
        let mut results = ResultsConfig::default();
        let mut messages = ErrorMessageTable::default();

        source_attribution.insert("results_path".to_string(), ConfigSource::Default);
        source_attribution.insert("format".to_string(), ConfigSource::Default);
        source_attribution.insert("messages".to_string(), ConfigSource::Default);

        let config_path = match &cli_args.config_path {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(ExitCheckError::Config(ConfigError::NotFound {
                        path: explicit.to_string(),
                    })
                    .into());
                }
                Some(explicit.clone())
            }
            None => Self::discover_config_file_from(start_dir),
        };

        if let Some(path) = &config_path {
            let file_config = Self::load_config_file(path)?;
            tracing::debug!(path = %path, "loaded config file");

            if let Some(file_results) = file_config.results {
                if let Some(file_path) = file_results.path {
                    results.path = Utf8PathBuf::from(file_path);
                    source_attribution.insert("results_path".to_string(), ConfigSource::Config);
                }
                if let Some(format) = file_results.format {
                    results.format = format;
                    source_attribution.insert("format".to_string(), ConfigSource::Config);
                }
            }

            if let Some(raw) = file_config.messages {
                messages = parse_message_table(raw)?;
                source_attribution.insert("messages".to_string(), ConfigSource::Config);
            }
        }

        if let Some(env_path) = env(RESULTS_PATH_ENV)
            && !env_path.is_empty()
        {
            results.path = Utf8PathBuf::from(env_path);
            source_attribution.insert("results_path".to_string(), ConfigSource::Env);
        }

        if let Some(path) = &cli_args.results_path {
            results.path = path.clone();
            source_attribution.insert("results_path".to_string(), ConfigSource::Cli);
        }
        if let Some(format) = cli_args.format {
            results.format = format;
            source_attribution.insert("format".to_string(), ConfigSource::Cli);
        }
        if let Some(messages_path) = &cli_args.messages_path {
            let overlay = load_message_file(messages_path)?;
            messages = messages.merged_with(&overlay);
            source_attribution.insert("messages".to_string(), ConfigSource::Cli);
        }

        let config = Self {
            results,
            messages,
            verbose: cli_args.verbose,
            source_attribution,
        };
        config.validate()?;

        Ok(config)
    }

    /// Discover config file by searching upward from a given directory
    ///
    /// Walks up the directory tree looking for `.exitcheck/config.toml`,
    /// stopping at repository root markers (.git, .hg, .svn) or the
    /// filesystem root.
    #[must_use]
    pub fn discover_config_file_from(start_dir: &Utf8Path) -> Option<Utf8PathBuf> {
        let mut current = Some(start_dir);

        while let Some(dir) = current {
            let candidate = dir.join(".exitcheck").join("config.toml");
            if candidate.is_file() {
                return Some(candidate);
            }
            if [".git", ".hg", ".svn"].iter().any(|m| dir.join(m).exists()) {
                break;
            }
            current = dir.parent();
        }

        None
    }

    fn load_config_file(path: &Utf8Path) -> Result<TomlConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        let config: TomlConfig = toml::from_str(&content).map_err(|e| {
            ExitCheckError::Config(ConfigError::InvalidFile(format!("{path}: {e}")))
        })?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ExitCheckError> {
        if self.results.path.as_str().is_empty() {
            return Err(ExitCheckError::Config(ConfigError::InvalidValue {
                key: "results_path".to_string(),
                value: "must not be empty".to_string(),
            }));
        }
        if self.results.path.file_name().is_none() {
            return Err(ExitCheckError::Config(ConfigError::InvalidValue {
                key: "results_path".to_string(),
                value: format!("'{}' does not name a file", self.results.path),
            }));
        }
        Ok(())
    }
}
