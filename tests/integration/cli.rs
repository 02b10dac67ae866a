//! Tests for the request-target binary

use std::fs;
use std::process::Stdio;

use crate::helpers::{command, multi, run_args, run_stdin, scalar, stdout_targets};

#[test]
fn test_cli_parses_arguments() {
    let output = run_args(&["/users?ids=1&ids=2", "/health"]);
    assert!(output.status.success());

    let targets = stdout_targets(&output);
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0].path, "/users");
    assert_eq!(targets[0].query["ids"], multi(&["1", "2"]));
    assert_eq!(targets[1].path, "/health");
    assert!(targets[1].query.is_empty());
}

#[test]
fn test_cli_json_shape() {
    let output = run_args(&["/users?sort=desc&ids=1&ids=2"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        r#"{"path":"/users","query":{"sort":"desc","ids":["1","2"]}}"#
    );
}

#[test]
fn test_cli_reads_stdin_lines() {
    let output = run_stdin(&mut command(), "/a?x=1\r\n/b?y=2&y=3\n\n");
    assert!(output.status.success());

    let targets = stdout_targets(&output);
    assert_eq!(targets.len(), 3);
    assert_eq!(targets[0].query["x"], scalar("1"));
    assert_eq!(targets[1].query["y"], multi(&["2", "3"]));
    assert_eq!(targets[2].path, "");
}

#[test]
fn test_cli_reads_stdin_from_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("targets.txt");
    fs::write(&path, "/users?first%20name=John\n/users?page=1#section\n").unwrap();

    let output = command()
        .stdin(Stdio::from(fs::File::open(&path).unwrap()))
        .output()
        .expect("Failed to run request-target");

    let targets = stdout_targets(&output);
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0].query["first name"], scalar("John"));
    assert_eq!(targets[1].path, "/users");
    assert_eq!(targets[1].query["page"], scalar("1"));
}

#[test]
fn test_cli_form_mode_from_env() {
    let output = command()
        .env("QUERY_DECODE_MODE", "form")
        .arg("/search?q=rust+lang")
        .output()
        .expect("Failed to run request-target");

    let targets = stdout_targets(&output);
    assert_eq!(targets[0].query["q"], scalar("rust lang"));
}

#[test]
fn test_cli_invalid_config_fails() {
    let output = command()
        .env("QUERY_DECODE_MODE", "html")
        .arg("/")
        .output()
        .expect("Failed to run request-target");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_json_logs_on_stderr() {
    let output = command()
        .env("LOG_LEVEL", "info")
        .env("LOG_FORMAT", "json")
        .arg("/x")
        .output()
        .expect("Failed to run request-target");

    assert!(output.status.success());
    assert_eq!(stdout_targets(&output).len(), 1);

    let stderr = String::from_utf8_lossy(&output.stderr);
    let entry: serde_json::Value = stderr
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .find(|v| v["msg"] == "Parsed targets")
        .expect("Missing summary log line");

    assert_eq!(entry["level"], "info");
    assert_eq!(entry["type"], "app");
    assert_eq!(entry["data"]["count"], 1);
    assert_eq!(entry["ctx"]["service"], "request_target");
}

#[test]
fn test_cli_non_utf8_stdin_is_lossy() {
    let output = run_stdin(&mut command(), b"/a?x=\xff\n/b?y=1\n");
    assert!(output.status.success());

    let targets = stdout_targets(&output);
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0].path, "/a");
    assert_eq!(targets[0].query["x"], scalar("\u{FFFD}"));
    assert_eq!(targets[1].query["y"], scalar("1"));
}

#[cfg(unix)]
#[test]
fn test_cli_non_utf8_argument_is_lossy() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let output = command()
        .arg(OsStr::from_bytes(b"/caf\xe9?name=\xe9"))
        .output()
        .expect("Failed to run request-target");

    assert!(output.status.success());
    let targets = stdout_targets(&output);
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].path, "/caf\u{FFFD}");
    assert_eq!(targets[0].query["name"], scalar("\u{FFFD}"));
}
