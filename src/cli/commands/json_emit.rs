//! JSON emit functions for CLI output
//!
//! CLI JSON output is canonical (JCS, RFC 8785) so it is stable across runs.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;

use exitcheck_utils::canonicalization::emit_jcs;

/// One effective configuration value and its origin
#[derive(Debug, Serialize)]
pub struct EffectiveValueJson {
    pub value: String,
    pub source: String,
}

/// `exitcheck config --json` output
#[derive(Debug, Serialize)]
pub struct EffectiveConfigJson {
    pub schema_version: String,
    pub values: BTreeMap<String, EffectiveValueJson>,
    pub messages: BTreeMap<String, String>,
}

/// Emit effective configuration as canonical JSON
pub fn emit_config_json(output: &EffectiveConfigJson) -> Result<String> {
    emit_jcs(output).context("Failed to emit config JSON")
}
