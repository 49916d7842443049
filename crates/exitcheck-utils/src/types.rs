use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::messages::{ErrorMessageTable, Placeholder};

/// Overall outcome of one exit check run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OverallStatus {
    Passed,
    Failed,
}

impl OverallStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failing check inside a result document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedValidation {
    pub exit_code: i32,
    pub message: String,
}

/// The document persisted after every exit check run.
///
/// Field order here is the on-disk order for pretty output. Build instances
/// with [`ValidationResult::passed`] or [`ValidationResult::failed`], which
/// keep `total_failures`, `failed_exit_codes` and `failed_validations`
/// consistent with each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// `YYYY-MM-DD HH:MM:SS UTC`
    pub timestamp: String,
    pub overall_status: OverallStatus,
    pub total_failures: usize,
    pub failed_exit_codes: Vec<i32>,
    pub failed_validations: Vec<FailedValidation>,
}

impl ValidationResult {
    /// Success shape: zero failures, empty arrays.
    #[must_use]
    pub fn passed(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            overall_status: OverallStatus::Passed,
            total_failures: 0,
            failed_exit_codes: Vec::new(),
            failed_validations: Vec::new(),
        }
    }

    /// Failure shape. `codes` is kept exactly as given: no sorting, no dedup.
    #[must_use]
    pub fn failed(timestamp: impl Into<String>, codes: &[i32], table: &ErrorMessageTable) -> Self {
        let failed_validations = codes
            .iter()
            .map(|&code| FailedValidation {
                exit_code: code,
                message: table.lookup_message(code, Placeholder::Generic).into_owned(),
            })
            .collect();

        Self {
            timestamp: timestamp.into(),
            overall_status: OverallStatus::Failed,
            total_failures: codes.len(),
            failed_exit_codes: codes.to_vec(),
            failed_validations,
        }
    }

    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.overall_status == OverallStatus::Passed
    }
}

/// On-disk JSON layout for result documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultFormat {
    /// Two-space indented, field order as declared
    #[default]
    Pretty,
    /// RFC 8785 JCS: compact, keys sorted
    Canonical,
}

impl ResultFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Canonical => "canonical",
        }
    }
}

impl fmt::Display for ResultFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pretty" => Ok(Self::Pretty),
            "canonical" | "jcs" => Ok(Self::Canonical),
            other => Err(format!("unknown result format '{other}'")),
        }
    }
}

/// Where an effective configuration value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Value provided via CLI argument (highest precedence).
    Cli,
    /// Value provided via environment variable.
    Env,
    /// Value loaded from a configuration or messages file.
    Config,
    /// Built-in default value (lowest precedence).
    Default,
}

impl ConfigSource {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Cli => "cli",
            Self::Env => "env",
            Self::Config => "config",
            Self::Default => "default",
        }
    }
}
