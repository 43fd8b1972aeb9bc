//! CLI integration tests.
//!
//! Tests the jsonv binary by invoking it as a subprocess, with input
//! supplied as a file argument or over stdin.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

fn jsonv_path() -> PathBuf {
    // Find the jsonv binary in the target directory
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_default();

    // Navigate to the deps directory's sibling (the main binary location)
    if path.ends_with("deps") {
        path.pop();
    }

    if cfg!(windows) {
        path.join("jsonv.exe")
    } else {
        path.join("jsonv")
    }
}

fn run_with_file(content: &str, name: &str) -> (i32, String) {
    let path = std::env::temp_dir().join(format!("jsonv_test_{name}.json"));
    fs::write(&path, content).unwrap();

    let output = Command::new(jsonv_path())
        .arg(&path)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run jsonv: {e}"));

    let _ = fs::remove_file(&path);

    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    (code, stdout)
}

fn run_with_stdin(input: &str) -> (i32, String) {
    let jsonv = jsonv_path();
    let mut child = Command::new(&jsonv)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to spawn jsonv at {jsonv:?}: {e}"));

    {
        let stdin = child.stdin.as_mut().unwrap();
        stdin.write_all(input.as_bytes()).unwrap();
    }

    let output = child.wait_with_output().unwrap();
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    (code, stdout)
}

// ============================================================================
// File argument
// ============================================================================

#[test]
fn cli_file_valid_json() {
    let (code, stdout) = run_with_file(r#"{"foo":123, "bar":[1,2,3]}"#, "valid");
    assert_eq!(code, 0, "Expected success exit code");
    assert!(
        stdout.contains("Success: parsed input"),
        "Expected success verdict: {stdout}"
    );
}

#[test]
fn cli_file_invalid_json() {
    let (code, stdout) = run_with_file(r#"{"foo":123,}"#, "invalid");
    assert_eq!(code, 1, "Expected failure exit code");
    assert!(
        stdout.contains("Error: input is not properly formatted JSON"),
        "Expected error verdict: {stdout}"
    );
}

#[test]
fn cli_file_multiline_json() {
    let content = "{\n  \"a\": 1,\n  \"b\": {\"c\": [true, null]}\n}\n";
    let (code, stdout) = run_with_file(content, "multiline");
    assert_eq!(code, 0, "Expected success exit code");
    assert!(stdout.contains("Success"), "Expected success: {stdout}");
}

#[test]
fn cli_file_not_found() {
    let output = Command::new(jsonv_path())
        .arg("/nonexistent/path/file.json")
        .output()
        .unwrap_or_else(|e| panic!("Failed to run jsonv: {e}"));

    assert_eq!(output.status.code(), Some(1), "Expected failure exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error"), "Expected error on stderr: {stderr}");
}

// ============================================================================
// Interactive input
// ============================================================================

#[test]
fn cli_stdin_valid_json() {
    let (code, stdout) = run_with_stdin("{\"a\":1}\n\n");
    assert_eq!(code, 0, "Expected success exit code");
    assert!(
        stdout.contains("Success: parsed input"),
        "Expected success verdict: {stdout}"
    );
}

#[test]
fn cli_stdin_reads_until_blank_line() {
    // The blank line ends input; the brace after it is never read.
    let (code, stdout) = run_with_stdin("{\"a\":\n\n1}\n\n");
    assert_eq!(code, 1, "Expected failure exit code");
    assert!(
        stdout.contains("Error: input is not properly formatted JSON"),
        "Expected error verdict: {stdout}"
    );
}

#[test]
fn cli_stdin_multiline_document() {
    let (code, stdout) = run_with_stdin("{\"a\": 1,\n\"b\": [2, 3]}\n\n");
    assert_eq!(code, 0, "Expected success exit code");
    assert!(stdout.contains("Success"), "Expected success: {stdout}");
}

#[test]
fn cli_stdin_eof_without_blank_line() {
    let (code, stdout) = run_with_stdin("{\"a\":1}");
    assert_eq!(code, 0, "Expected success exit code");
    assert!(stdout.contains("Success"), "Expected success: {stdout}");
}
