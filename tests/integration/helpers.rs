//! Test helpers and utilities

use std::io::Write;
use std::process::{Command, Output, Stdio};

use request_target::{ParsedTarget, QueryValue};

/// Path to the compiled CLI binary.
pub const BIN: &str = env!("CARGO_BIN_EXE_request-target");

/// Build a command for the CLI with a clean logging/decoding environment.
pub fn command() -> Command {
    let mut cmd = Command::new(BIN);
    cmd.env_remove("QUERY_DECODE_MODE")
        .env_remove("QUERY_PLUS_AS_SPACE")
        .env_remove("RUST_LOG")
        .env_remove("LOG_FORMAT")
        .env_remove("SERVICE_NAME")
        .env("LOG_LEVEL", "error");
    cmd
}

/// Run the CLI with arguments.
pub fn run_args(args: &[&str]) -> Output {
    command().args(args).output().expect("Failed to run request-target")
}

/// Run the CLI feeding `input` on stdin.
pub fn run_stdin(cmd: &mut Command, input: impl AsRef<[u8]>) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn request-target");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_ref())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for request-target")
}

/// Parse each stdout line of a CLI run as a `ParsedTarget`.
pub fn stdout_targets(output: &Output) -> Vec<ParsedTarget> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("Output line is not a ParsedTarget"))
        .collect()
}

/// Shorthand for a scalar value.
pub fn scalar(v: &str) -> QueryValue {
    QueryValue::from(v)
}

/// Shorthand for a list value.
pub fn multi(vs: &[&str]) -> QueryValue {
    QueryValue::from(vs.to_vec())
}
