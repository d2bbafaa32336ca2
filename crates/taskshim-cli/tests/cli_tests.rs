//! Integration tests for the taskshim binary.
//!
//! These run the real binary and check exit codes and the stdout protocol.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use taskshim_core::protocol::parse_line;

fn shim_cmd() -> Command {
    let mut cmd = Command::cargo_bin("taskshim").unwrap();
    cmd.env_remove("TASKSHIM_FORWARD_OUTPUT")
        .env_remove("TASKSHIM_LOG");
    cmd
}

fn protocol_lines(stdout: &[u8]) -> Vec<taskshim_core::protocol::ProtocolMessage> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter_map(parse_line)
        .collect()
}

// ============================================================================
// Argument validation
// ============================================================================

#[test]
fn test_missing_payload_is_misconfiguration() {
    shim_cmd()
        .arg("ok")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("airplane_output:error "))
        .stdout(predicate::str::contains(
            "Task CLI arguments may be misconfigured.",
        ));
}

#[test]
fn test_no_args_is_misconfiguration() {
    shim_cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("(via {{JSON}})"));
}

#[test]
fn test_extra_args_is_misconfiguration() {
    shim_cmd()
        .args(["ok", "{}", "{}"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Task CLI arguments may be misconfigured.",
        ));
}

#[test]
fn test_invalid_json_payload() {
    let output = shim_cmd().args(["ok", "{bad json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let lines = protocol_lines(&output.stdout);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].is_error());
    let message = lines[0].value["error"].as_str().unwrap();
    assert!(message.starts_with("invalid JSON payload: "), "{message}");
}

#[test]
fn test_unknown_entrypoint() {
    shim_cmd()
        .args(["does-not-exist", "{}"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "no task registered for entrypoint 'does-not-exist'",
        ));
}

// ============================================================================
// Success path
// ============================================================================

#[test]
fn test_returned_value_is_reported() {
    let output = shim_cmd().args(["ok", r#"{"id":"abc"}"#]).output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let lines = protocol_lines(&output.stdout);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].output_name(), "output");
    assert_eq!(lines[0].value, json!({ "ok": true }));
}

#[test]
fn test_async_task_output() {
    let output = shim_cmd()
        .args(["echo", r#"{"n":[1,2,3]}"#])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(protocol_lines(&output.stdout)[0].value, json!({ "n": [1, 2, 3] }));
}

#[test]
fn test_typed_task_mixes_logs_and_output() {
    let output = shim_cmd()
        .args(["lookup", r#"{"id":"abc"}"#])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("looking up abc"));
    let lines = protocol_lines(&output.stdout);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].value, json!({ "id": "abc", "found": true }));
}

#[test]
fn test_no_value_means_no_output_line() {
    shim_cmd()
        .args(["noop", "{}"])
        .assert()
        .success()
        .stdout(predicate::str::contains("airplane_output").not());
}

#[test]
fn test_hello_prints_plain_output() {
    shim_cmd()
        .args(["hello", r#"{"name":"shim"}"#])
        .assert()
        .success()
        .stdout(predicate::str::diff("Hello, shim!\n"));
}

#[test]
fn test_forwarding_disabled() {
    shim_cmd()
        .env("TASKSHIM_FORWARD_OUTPUT", "no")
        .args(["ok", "{}"])
        .assert()
        .success()
        .stdout(predicate::str::contains("airplane_output").not());
}

#[test]
fn test_invalid_forwarding_setting() {
    shim_cmd()
        .env("TASKSHIM_FORWARD_OUTPUT", "maybe")
        .args(["ok", "{}"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("TASKSHIM_FORWARD_OUTPUT"));
}

// ============================================================================
// Failure path
// ============================================================================

#[test]
fn test_task_error_line_and_diagnostic() {
    shim_cmd()
        .args(["fail", "{}"])
        .assert()
        .code(1)
        .stdout(predicate::str::diff(
            "airplane_output:error {\"error\":\"Error: yikes!\"}\n",
        ))
        .stderr(predicate::str::contains("yikes!"));
}

#[test]
fn test_failure_is_logged_at_default_level() {
    shim_cmd()
        .args(["fail", "{}"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("task invocation failed"));
}

#[test]
fn test_async_rejection_with_context() {
    shim_cmd()
        .args(["reject", "{}"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            r#"{"error":"Error: fetching report: upstream timed out"}"#,
        ))
        .stderr(predicate::str::contains("Caused by"));
}

#[test]
fn test_panic_is_reported() {
    shim_cmd()
        .args(["panic", "{}"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            r#"{"error":"Error: task panicked: task exploded"}"#,
        ));
}

#[test]
fn test_schema_mismatch_is_task_error() {
    let output = shim_cmd().args(["lookup", r#"{"name":1}"#]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let lines = protocol_lines(&output.stdout);
    let message = lines[0].value["error"].as_str().unwrap();
    assert!(message.starts_with("Error: decoding parameters for 'lookup'"));
    assert!(message.contains("missing field `id`"));
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = shim_cmd().args(["fail", "{}"]).output().unwrap();
    let second = shim_cmd().args(["fail", "{}"]).output().unwrap();
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}
