//! CLI smoke tests.
//!
//! These run the compiled binary with an isolated HOME so they never
//! touch a real session file, and never reach a network.

use std::path::Path;
use std::process::{Command, Output};

/// Run the CLI with a custom HOME directory for isolated session storage.
fn run_cli_with_env(args: &[&str], home: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_campus"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.output().expect("Failed to execute CLI")
}

#[test]
fn test_help_lists_commands() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli_with_env(&["--help"], home.path());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("login"));
    assert!(stdout.contains("dashboard"));
    assert!(stdout.contains("logout"));
}

#[test]
fn test_whoami_without_session_fails() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli_with_env(&["whoami"], home.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No active session"));
}

#[test]
fn test_check_without_session_fails() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli_with_env(&["check"], home.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No active session"));
}

#[test]
fn test_invalid_server_url_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli_with_env(&["--server", "not-a-url", "whoami"], home.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid server URL"));
}

#[test]
fn test_logout_without_session_is_a_no_op() {
    let home = tempfile::tempdir().unwrap();
    let output = run_cli_with_env(&["logout"], home.path());

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No active session"));
}
