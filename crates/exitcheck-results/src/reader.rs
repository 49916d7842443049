use camino::Utf8Path;
use std::io::ErrorKind;

use exitcheck_utils::error::ExitCheckError;

use crate::model::ResultDocument;

/// Text a remote `cat` prints when the result file does not exist
pub const MISSING_FILE_MARKER: &str = "No such file or directory";

/// Read and parse a result file from the local filesystem.
pub fn read_result_file(path: &Utf8Path) -> Result<ResultDocument, ExitCheckError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ExitCheckError::ResultMissing {
                path: path.to_string(),
            });
        }
        Err(e) => return Err(ExitCheckError::Io(e)),
    };

    tracing::debug!(path = %path, bytes = content.len(), "read result file");
    parse_document(&content)
}

/// Parse output captured from a shell that printed the result file.
///
/// The capture may start with a prompt and the echoed command; everything
/// before the first `{` is dropped. `source` names the file for error
/// messages.
pub fn parse_captured_output(raw: &str, source: &str) -> Result<ResultDocument, ExitCheckError> {
    if raw.trim().is_empty() || raw.contains(MISSING_FILE_MARKER) {
        return Err(ExitCheckError::ResultMissing {
            path: source.to_string(),
        });
    }

    let body = match raw.find('{') {
        Some(start) => &raw[start..],
        None => raw,
    };
    parse_document(body)
}

/// Parse a result document, defaulting any missing field.
pub fn parse_document(text: &str) -> Result<ResultDocument, ExitCheckError> {
    let trimmed = text.trim();
    serde_json::from_str(trimmed).map_err(|e| ExitCheckError::ResultParse {
        reason: e.to_string(),
        raw: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    const CLEAN: &str = r#"{
  "timestamp": "2025-11-18 22:54:32 UTC",
  "overall_status": "FAILED",
  "total_failures": 1,
  "failed_exit_codes": [7],
  "failed_validations": [{"exit_code": 7, "message": "timeout"}]
}"#;

    #[test]
    fn test_parse_clean_document() {
        let doc = parse_document(CLEAN).unwrap();
        assert_eq!(doc.overall_status, "FAILED");
        assert_eq!(doc.total_failures, 1);
        assert_eq!(doc.failed_exit_codes, vec![7]);
        assert_eq!(doc.failed_validations[0].message.as_deref(), Some("timeout"));
        assert!(!doc.passed());
    }

    #[test]
    fn test_echo_prefix_is_stripped() {
        let captured = format!(
            "dsm06-0102-0317-03t0# sudo cat /tmp/exit_check_validation_results.json\n{CLEAN}\ndsm06-0102-0317-03t0# "
        );
        // trailing prompt after the closing brace is not JSON
        assert!(parse_captured_output(&captured, "r.json").is_err());

        let captured = format!("dsm06# sudo cat /tmp/r.json\n{CLEAN}\n");
        let doc = parse_captured_output(&captured, "r.json").unwrap();
        assert_eq!(doc, parse_document(CLEAN).unwrap());
    }

    #[test]
    fn test_missing_markers() {
        for raw in ["", "   \n", "cat: /tmp/r.json: No such file or directory"] {
            let err = parse_captured_output(raw, "/tmp/r.json").unwrap_err();
            assert!(
                matches!(err, ExitCheckError::ResultMissing { ref path } if path == "/tmp/r.json"),
                "unexpected error for {raw:?}: {err}"
            );
        }
    }

    #[test]
    fn test_malformed_json_keeps_raw_text() {
        let err = parse_captured_output("prompt# {\"overall_status\": ", "r.json").unwrap_err();
        match err {
            ExitCheckError::ResultParse { raw, .. } => assert_eq!(raw, "{\"overall_status\":"),
            other => panic!("expected parse error, got {other}"),
        }
    }

    #[test]
    fn test_missing_fields_default() {
        let doc = parse_document("{}").unwrap();
        assert_eq!(doc, ResultDocument::default());
        assert_eq!(doc.overall_status, "UNKNOWN");
        assert_eq!(doc.timestamp, "N/A");
        assert!(!doc.passed());
        assert!(!doc.failed());
    }

    #[test]
    fn test_read_result_file_missing() {
        let dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.json")).unwrap();
        assert!(matches!(
            read_result_file(&path),
            Err(ExitCheckError::ResultMissing { .. })
        ));
    }

    #[test]
    fn test_read_result_file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("r.json")).unwrap();
        std::fs::write(&path, CLEAN).unwrap();

        let doc = read_result_file(&path).unwrap();
        assert_eq!(doc.timestamp, "2025-11-18 22:54:32 UTC");
    }
}
