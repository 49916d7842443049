use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::ResultFormat;

/// Emit a value as JCS-canonical JSON (RFC 8785).
///
/// Keys are sorted and whitespace is removed, so two documents with the same
/// content always produce identical bytes regardless of struct field order.
///
/// # Example
///
/// ```rust
/// use exitcheck_utils::canonicalization::emit_jcs;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Entry {
///     message: String,
///     exit_code: i32,
/// }
///
/// let entry = Entry { message: "timeout".into(), exit_code: 7 };
/// assert_eq!(emit_jcs(&entry).unwrap(), r#"{"exit_code":7,"message":"timeout"}"#);
/// ```
pub fn emit_jcs<T: Serialize>(value: &T) -> Result<String> {
    let json_value =
        serde_json::to_value(value).with_context(|| "Failed to serialize value to JSON")?;
    let json_bytes = serde_json_canonicalizer::to_vec(&json_value)
        .with_context(|| "Failed to canonicalize JSON using JCS")?;
    String::from_utf8(json_bytes).with_context(|| "JCS output contained invalid UTF-8")
}

/// Emit a value as two-space indented JSON, keeping struct field order.
pub fn emit_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).with_context(|| "Failed to serialize value to JSON")
}

/// Emit a value in the requested on-disk format.
pub fn emit<T: Serialize>(value: &T, format: ResultFormat) -> Result<String> {
    match format {
        ResultFormat::Pretty => emit_pretty(value),
        ResultFormat::Canonical => emit_jcs(value),
    }
}
