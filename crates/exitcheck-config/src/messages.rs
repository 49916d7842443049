//! Loading exit code → message tables from TOML.

use anyhow::{Context, Result};
use camino::Utf8Path;
use std::collections::BTreeMap;

use exitcheck_utils::error::{ConfigError, ExitCheckError};
use exitcheck_utils::messages::ErrorMessageTable;

/// Convert raw `[messages]` entries into a table.
///
/// TOML table keys are always strings; each must parse as a positive integer.
pub fn parse_message_table(
    raw: BTreeMap<String, String>,
) -> Result<ErrorMessageTable, ExitCheckError> {
    let mut entries = BTreeMap::new();

    for (key, message) in raw {
        let code: i32 = key.trim().parse().map_err(|_| {
            ExitCheckError::Config(ConfigError::InvalidValue {
                key: "messages".to_string(),
                value: format!("key '{key}' is not an integer exit code"),
            })
        })?;
        if code <= 0 {
            return Err(ExitCheckError::Config(ConfigError::InvalidValue {
                key: "messages".to_string(),
                value: format!("exit code {code} must be positive"),
            }));
        }
        entries.insert(code, message);
    }

    Ok(ErrorMessageTable::new(entries))
}

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct MessageFile {
    #[serde(default)]
    messages: BTreeMap<String, String>,
}

/// Load a standalone messages file containing a `[messages]` table.
pub fn load_message_file(path: &Utf8Path) -> Result<ErrorMessageTable> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ExitCheckError::Config(ConfigError::NotFound {
                path: path.to_string(),
            })
            .into());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read messages file: {path}"));
        }
    };

    let file: MessageFile = toml::from_str(&content).map_err(|e| {
        ExitCheckError::Config(ConfigError::InvalidFile(format!("{path}: {e}")))
    })?;

    let table = parse_message_table(file.messages)?;
    tracing::debug!(path = %path, entries = table.len(), "loaded message table");
    Ok(table)
}
