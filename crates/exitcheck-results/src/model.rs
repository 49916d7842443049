use serde::{Deserialize, Serialize};

use exitcheck_utils::types::{OverallStatus, ValidationResult};

/// Status reported when a document carries no `overall_status`
pub const UNKNOWN_STATUS: &str = "UNKNOWN";

/// A result document as read back from disk or a remote shell.
///
/// Unlike [`ValidationResult`], every field is optional on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDocument {
    #[serde(default = "default_timestamp")]
    pub timestamp: String,
    #[serde(default = "default_status")]
    pub overall_status: String,
    #[serde(default)]
    pub total_failures: u64,
    #[serde(default)]
    pub failed_exit_codes: Vec<i64>,
    #[serde(default)]
    pub failed_validations: Vec<ResultEntry>,
}

/// One `failed_validations` entry; either field may be absent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    #[serde(default)]
    pub exit_code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_timestamp() -> String {
    "N/A".to_string()
}

fn default_status() -> String {
    UNKNOWN_STATUS.to_string()
}

impl Default for ResultDocument {
    fn default() -> Self {
        Self {
            timestamp: default_timestamp(),
            overall_status: default_status(),
            total_failures: 0,
            failed_exit_codes: Vec::new(),
            failed_validations: Vec::new(),
        }
    }
}

impl ResultDocument {
    /// True only for an explicit `PASSED` status.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.overall_status == OverallStatus::Passed.as_str()
    }

    #[must_use]
    pub fn failed(&self) -> bool {
        self.overall_status == OverallStatus::Failed.as_str()
    }
}

impl From<&ValidationResult> for ResultDocument {
    fn from(result: &ValidationResult) -> Self {
        Self {
            timestamp: result.timestamp.clone(),
            overall_status: result.overall_status.as_str().to_string(),
            total_failures: result.total_failures as u64,
            failed_exit_codes: result.failed_exit_codes.iter().map(|&c| i64::from(c)).collect(),
            failed_validations: result
                .failed_validations
                .iter()
                .map(|v| ResultEntry {
                    exit_code: Some(i64::from(v.exit_code)),
                    message: Some(v.message.clone()),
                })
                .collect(),
        }
    }
}
