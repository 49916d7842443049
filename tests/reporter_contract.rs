//! Reporter contract tests
//!
//! Exercises the public library surface the way a validation script embeds
//! it: build a message table, collect failing codes, report once.

use camino::Utf8PathBuf;
use exitcheck::results::{parse_captured_output, read_result_file};
use exitcheck::{
    ErrorMessageTable, ExitCheckError, FailedValidation, OverallStatus, Reporter, ResultWriter,
    ValidationResult, lookup_message, write_failure_result, write_success_result,
};
use tempfile::TempDir;

fn scratch_path() -> (TempDir, Utf8PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().join("exit_check_validation_results.json"))
        .unwrap();
    (dir, path)
}

fn table() -> ErrorMessageTable {
    ErrorMessageTable::from_iter([(4, "bad input"), (7, "timeout")])
}

#[test]
fn test_lookup_returns_stored_message_or_placeholder() {
    assert_eq!(lookup_message(&table(), 4), "bad input");
    assert_eq!(lookup_message(&table(), 5), "Unknown error code: 5");
}

#[test]
fn test_success_overwrites_prior_failure() {
    let (_dir, path) = scratch_path();
    write_failure_result(&path, &[4, 7], &table()).unwrap();
    let written = write_success_result(&path).unwrap();

    let read = read_result_file(&path).unwrap();
    assert!(read.passed());
    assert_eq!(read.total_failures, 0);
    assert!(read.failed_exit_codes.is_empty());
    assert!(read.failed_validations.is_empty());
    assert_eq!(read.timestamp, written.timestamp);
}

#[test]
fn test_failure_document_matches_codes() {
    let (_dir, path) = scratch_path();
    let written = write_failure_result(&path, &[4, 4, 7], &table()).unwrap();

    assert_eq!(written.overall_status, OverallStatus::Failed);
    assert_eq!(written.total_failures, 3);
    assert_eq!(written.failed_exit_codes, vec![4, 4, 7]);
    assert_eq!(
        written.failed_validations,
        vec![
            FailedValidation {
                exit_code: 4,
                message: "bad input".to_string()
            },
            FailedValidation {
                exit_code: 4,
                message: "bad input".to_string()
            },
            FailedValidation {
                exit_code: 7,
                message: "timeout".to_string()
            },
        ]
    );

    let on_disk: ValidationResult =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, written);
}

#[test]
fn test_unknown_code_with_empty_table() {
    let (_dir, path) = scratch_path();
    write_failure_result(&path, &[99], &ErrorMessageTable::default()).unwrap();

    let read = read_result_file(&path).unwrap();
    assert_eq!(read.failed_validations.len(), 1);
    assert_eq!(read.failed_validations[0].exit_code, Some(99));
    assert_eq!(read.failed_validations[0].message.as_deref(), Some("Unknown error"));
}

#[test]
fn test_full_run_reports_then_persists() {
    let (_dir, path) = scratch_path();
    let failing = [7, 4];

    let mut reporter = Reporter::new(Vec::new(), Vec::new());
    reporter.log_debug(["running", "2", "checks"]);
    for &code in &failing {
        reporter.report_failure(code, &table());
    }
    ResultWriter::new(path.clone())
        .write_failure(&failing, &table())
        .unwrap();

    let (out, _) = reporter.into_inner();
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("[DEBUG] ") && lines[0].ends_with(" UTC running 2 checks"));
    assert_eq!(lines[1], "[RESULT] VALIDATION_FAILED: 7 - timeout");
    assert_eq!(lines[2], "[RESULT] VALIDATION_FAILED: 4 - bad input");

    let read = read_result_file(&path).unwrap();
    assert_eq!(
        read.failure_details().unwrap(),
        "Exit check failed with 2 failure(s):\n  - Exit Code 7: timeout\n  - Exit Code 4: bad input"
    );
}

#[test]
fn test_captured_output_parses_like_clean_file() {
    let (_dir, path) = scratch_path();
    write_failure_result(&path, &[4], &table()).unwrap();
    let clean = std::fs::read_to_string(&path).unwrap();
    let captured = format!("dsm06-0102-0317-03t0# sudo cat {path}\n{clean}");

    assert_eq!(
        parse_captured_output(&captured, path.as_str()).unwrap(),
        read_result_file(&path).unwrap()
    );
}

#[test]
fn test_write_into_missing_parent_directory() {
    let dir = TempDir::new().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().join("a/b/results.json")).unwrap();
    write_success_result(&path).unwrap();
    assert!(read_result_file(&path).unwrap().passed());
}

#[test]
fn test_write_failure_surfaces_as_error() {
    let dir = TempDir::new().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    let err = write_failure_result(&path, &[4], &table()).unwrap_err();
    assert!(matches!(err, ExitCheckError::ResultWriteFailed { .. }));
}
