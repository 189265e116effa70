//! Integration test: drive the `locator-validate` binary end to end.
//!
//! Each test runs the binary inside a temporary directory that holds
//! `locatorSchema.json`, matching how the tool resolves its schema.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::json;
use tempfile::TempDir;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_locator-validate")
}

fn workspace(schema: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("locatorSchema.json"), schema).unwrap();
    dir
}

fn required_id() -> TempDir {
    workspace(&json!({"type": "object", "required": ["id"]}).to_string())
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn locator-validate")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_valid_document_exits_zero_silently() {
    let dir = required_id();
    std::fs::write(dir.path().join("doc.json"), r#"{"id": 1}"#).unwrap();

    let output = run_in(dir.path(), &["doc.json"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty(), "stderr: {}", stderr_of(&output));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_document_exits_one_with_messages() {
    let dir = required_id();
    std::fs::write(dir.path().join("doc.json"), r#"{"name": "x"}"#).unwrap();

    let output = run_in(dir.path(), &["doc.json"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(stderr.lines().count() >= 1);
    assert!(stderr.contains("id"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_wrong_argument_count_is_fatal() {
    let dir = required_id();

    let none = run_in(dir.path(), &[]);
    assert_eq!(none.status.code(), Some(2));
    assert!(stderr_of(&none).contains("usage error"));

    let two = run_in(dir.path(), &["a.json", "b.json"]);
    assert_eq!(two.status.code(), Some(2));
    assert!(stderr_of(&two).contains("usage error"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = required_id();
    let output = run_in(dir.path(), &["does-not-exist.json"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("document read error"));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let dir = required_id();
    std::fs::write(dir.path().join("doc.json"), "not json").unwrap();

    let output = run_in(dir.path(), &["doc.json"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("document parse error"));
}

#[test]
fn test_schema_resolved_from_working_directory() {
    let schema_dir = required_id();
    let elsewhere = tempfile::tempdir().unwrap();
    let doc = schema_dir.path().join("doc.json");
    std::fs::write(&doc, r#"{"id": 1}"#).unwrap();

    // Same document, but the working directory has no locatorSchema.json.
    let output = run_in(elsewhere.path(), &[doc.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("schema read error"));
}

#[test]
fn test_invalid_schema_is_compile_error() {
    let dir = workspace(r#"{"type": 12}"#);
    std::fs::write(dir.path().join("doc.json"), "{}").unwrap();

    let output = run_in(dir.path(), &["doc.json"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("schema compile error"));
}

#[test]
fn test_rust_log_enables_diagnostics_on_stderr() {
    let dir = required_id();
    std::fs::write(dir.path().join("doc.json"), r#"{"id": 1}"#).unwrap();

    let output = Command::new(bin())
        .arg("doc.json")
        .current_dir(dir.path())
        .env("RUST_LOG", "info")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr_of(&output).contains("validation finished"));
    assert!(output.stdout.is_empty());
}
