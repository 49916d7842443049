//! Exit code alignment tests
//!
//! These tests deliberately trigger each error class and verify that the
//! process exit code matches the documented table and that stdout stays free
//! of error text.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn scratch() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

fn run_exitcheck(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_exitcheck"))
        .args(args)
        .current_dir(dir)
        .env_remove("EXITCHECK_RESULTS_PATH")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute exitcheck")
}

fn exit_code(output: &Output) -> i32 {
    output.status.code().unwrap_or(1)
}

#[test]
fn test_success_is_zero() {
    let dir = scratch();
    let results = dir.path().join("r.json");
    let output = run_exitcheck(&["pass", "--results", results.to_str().unwrap()], dir.path());
    assert_eq!(exit_code(&output), 0);
}

#[test]
fn test_bad_arguments_are_cli_args() {
    let dir = scratch();
    let output = run_exitcheck(&["fail", "--code", "notanumber"], dir.path());
    assert_eq!(exit_code(&output), 2, "Expected CLI_ARGS exit code");
}

#[test]
fn test_invalid_config_is_cli_args() {
    let dir = scratch();
    std::fs::create_dir(dir.path().join(".exitcheck")).unwrap();
    std::fs::write(
        dir.path().join(".exitcheck/config.toml"),
        "[messages]\nfour = \"bad input\"\n",
    )
    .unwrap();

    let output = run_exitcheck(&["lookup", "4"], dir.path());
    assert_eq!(exit_code(&output), 2, "Expected CLI_ARGS exit code");
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Suggestions:"));
}

#[test]
fn test_missing_explicit_config_is_cli_args() {
    let dir = scratch();
    let output = run_exitcheck(&["lookup", "4", "--config", "absent.toml"], dir.path());
    assert_eq!(exit_code(&output), 2);
}

#[test]
fn test_recorded_failure_is_validation_failed() {
    let dir = scratch();
    let results = dir.path().join("r.json");
    let output = run_exitcheck(
        &["fail", "--code", "4", "--results", results.to_str().unwrap()],
        dir.path(),
    );
    assert_eq!(exit_code(&output), 3, "Expected VALIDATION_FAILED exit code");
}

#[test]
fn test_missing_result_is_unreadable() {
    let dir = scratch();
    let output = run_exitcheck(&["show", "absent.json"], dir.path());
    assert_eq!(exit_code(&output), 4, "Expected RESULT_UNREADABLE exit code");
    assert!(String::from_utf8_lossy(&output.stderr).contains("No validation result found"));
}

#[test]
fn test_malformed_result_is_unreadable() {
    let dir = scratch();
    std::fs::write(dir.path().join("broken.json"), "{\"overall_status\": ").unwrap();
    let output = run_exitcheck(&["show", "broken.json"], dir.path());
    assert_eq!(exit_code(&output), 4);
}

#[test]
fn test_unwritable_result_is_internal() {
    let dir = scratch();
    // A directory cannot be replaced by the result file.
    let output = run_exitcheck(
        &["pass", "--results", dir.path().to_str().unwrap()],
        dir.path(),
    );
    assert_eq!(exit_code(&output), 1, "Expected INTERNAL exit code");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to write validation result"));
}
