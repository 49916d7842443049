use thiserror::Error;

/// Library-level error type with user-friendly reporting.
///
/// `ExitCheckError` is returned by the reporter, reader and configuration
/// layers. It provides:
/// - Detailed error information for programmatic handling
/// - User-friendly messages with context and suggestions
/// - Mapping to CLI exit codes for consistent error reporting
///
/// An unknown check exit code is never an error: it degrades to a placeholder
/// message in [`ErrorMessageTable`](crate::messages::ErrorMessageTable).
///
/// # Exit Code Mapping
///
/// | Exit Code | Error Type |
/// |-----------|------------|
/// | 2 | Configuration errors |
/// | 4 | Result file missing or malformed |
/// | 1 | Other errors |
///
/// # Example
///
/// ```rust
/// use exitcheck_utils::error::ExitCheckError;
///
/// fn handle_error(err: ExitCheckError) {
///     eprintln!("{}", err.display_for_user());
///     std::process::exit(err.to_exit_code().as_i32());
/// }
/// ```
///
/// Library code returns `ExitCheckError` and does NOT call `std::process::exit()`.
#[derive(Error, Debug)]
pub enum ExitCheckError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Result write failed at {path}: {reason}")]
    ResultWriteFailed { path: String, reason: String },

    #[error("Result not found at {path}")]
    ResultMissing { path: String },

    #[error("Result could not be parsed: {reason}")]
    ResultParse { reason: String, raw: String },

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration file: {0}")]
    InvalidFile(String),

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found at {path}")]
    NotFound { path: String },
}

/// Trait for providing user-friendly error reporting with context and suggestions
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get contextual information about the error
    fn context(&self) -> Option<String>;

    /// Get suggested actions to resolve the error
    fn suggestions(&self) -> Vec<String>;

    /// Get the error category for grouping similar errors
    fn category(&self) -> ErrorCategory;
}

/// Categories of errors for better organization and handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    FileSystem,
    ResultFormat,
}

impl UserFriendlyError for ConfigError {
    fn user_message(&self) -> String {
        match self {
            Self::InvalidFile(reason) => {
                format!("Configuration file has invalid format: {reason}")
            }
            Self::InvalidValue { key, value } => {
                format!("Configuration '{key}' has invalid value: {value}")
            }
            Self::NotFound { path } => format!("Configuration file not found: {path}"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::InvalidFile(_) => Some(
                "Configuration files must be valid TOML with optional [results] and [messages] tables."
                    .to_string(),
            ),
            Self::InvalidValue { key, .. } => Some(format!(
                "The '{key}' configuration option has specific format requirements."
            )),
            Self::NotFound { .. } => Some(
                "exitcheck searches for .exitcheck/config.toml starting from the current directory upward."
                    .to_string(),
            ),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFile(_) => vec![
                "Check the TOML syntax using a TOML validator".to_string(),
                "Quote message table keys that are not bare integers".to_string(),
            ],
            Self::InvalidValue { key, .. } => match key.as_str() {
                "messages" => vec![
                    "Use positive integer exit codes as keys, e.g. 4 = \"bad input\"".to_string(),
                ],
                "format" => vec!["Use 'pretty' or 'canonical'".to_string()],
                _ => vec!["Check the documentation for valid values".to_string()],
            },
            Self::NotFound { path } => vec![
                format!("Create the file at {path} or drop the explicit path flag"),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}

impl UserFriendlyError for ExitCheckError {
    fn user_message(&self) -> String {
        match self {
            Self::Config(config_err) => config_err.user_message(),
            Self::Io(io_err) => format!("File system operation failed: {io_err}"),
            Self::ResultWriteFailed { path, reason } => {
                format!("Failed to write validation result to {path}: {reason}")
            }
            Self::ResultMissing { path } => format!("No validation result found at {path}"),
            Self::ResultParse { reason, .. } => {
                format!("Validation result is not valid JSON: {reason}")
            }
            Self::Serialization(reason) => {
                format!("Failed to encode validation result: {reason}")
            }
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::Config(config_err) => config_err.context(),
            Self::Io(_) | Self::ResultWriteFailed { .. } => Some(
                "Results are written to a temporary file in the target directory and renamed into place."
                    .to_string(),
            ),
            Self::ResultMissing { .. } => {
                Some("The checks may not have run, or the result was cleaned up.".to_string())
            }
            Self::ResultParse { raw, .. } => Some(format!("Raw output: {raw}")),
            Self::Serialization(_) => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config(config_err) => config_err.suggestions(),
            Self::Io(_) | Self::ResultWriteFailed { .. } => vec![
                "Check that the results directory exists and is writable".to_string(),
                "Point --results at a different location".to_string(),
            ],
            Self::ResultMissing { .. } => {
                vec!["Re-run the exit check script before reading results".to_string()]
            }
            Self::ResultParse { .. } => vec![
                "Inspect the result file for truncation or stray output".to_string(),
            ],
            Self::Serialization(_) => Vec::new(),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(_) => ErrorCategory::Configuration,
            Self::Io(_) | Self::ResultWriteFailed { .. } => ErrorCategory::FileSystem,
            Self::ResultMissing { .. } | Self::ResultParse { .. } | Self::Serialization(_) => {
                ErrorCategory::ResultFormat
            }
        }
    }
}

impl ExitCheckError {
    /// Get a user-friendly error message with context and actionable suggestions.
    #[must_use]
    pub fn display_for_user(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Error: {}\n", self.user_message()));

        if let Some(ctx) = self.context() {
            output.push_str(&format!("\nContext: {ctx}\n"));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in suggestions {
                output.push_str(&format!("  • {suggestion}\n"));
            }
        }

        output
    }

    /// Map this error to the appropriate CLI exit code.
    #[must_use]
    pub fn to_exit_code(&self) -> crate::exit_codes::ExitCode {
        use crate::exit_codes::ExitCode;

        match self {
            ExitCheckError::Config(_) => ExitCode::CLI_ARGS,
            ExitCheckError::ResultMissing { .. } | ExitCheckError::ResultParse { .. } => {
                ExitCode::RESULT_UNREADABLE
            }
            ExitCheckError::Io(_)
            | ExitCheckError::ResultWriteFailed { .. }
            | ExitCheckError::Serialization(_) => ExitCode::INTERNAL,
        }
    }
}
