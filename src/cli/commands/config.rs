//! Config command implementation

use anyhow::Result;
use std::io::Write;

use exitcheck_config::Config;
use exitcheck_utils::exit_codes::ExitCode;

use super::json_emit::{EffectiveConfigJson, EffectiveValueJson, emit_config_json};

/// Print the effective configuration with per-value source attribution.
pub fn execute_config_command(json: bool, config: &Config, out: &mut impl Write) -> Result<ExitCode> {
    let effective = config.effective_config();

    if json {
        let output = EffectiveConfigJson {
            schema_version: "1".to_string(),
            values: effective
                .into_iter()
                .map(|(key, (value, source))| (key, EffectiveValueJson { value, source }))
                .collect(),
            messages: config
                .messages
                .iter()
                .map(|(code, message)| (code.to_string(), message.to_string()))
                .collect(),
        };
        writeln!(out, "{}", emit_config_json(&output)?)?;
        return Ok(ExitCode::SUCCESS);
    }

    writeln!(out, "Effective configuration:")?;
    for (key, (value, source)) in &effective {
        writeln!(out, "  {key} = {value}  [{source}]")?;
    }
    if !config.messages.is_empty() {
        writeln!(out, "Messages:")?;
        for (code, message) in config.messages.iter() {
            writeln!(out, "  {code} = {message}")?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
