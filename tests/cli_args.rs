//! Tests for CLI argument parsing, run against the built binary.

mod common;

use common::temp_config;
use std::process::Command;

fn stateholder_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_stateholder"))
}

#[test]
fn test_help_lists_options() {
    let output = stateholder_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--print-config"));
    assert!(stdout.contains("--print-on-exit"));
}

#[test]
fn test_print_config_shows_effective_values() {
    let (_dir, path) = temp_config("[ui]\nconfirm_label = \"Apply\"\n");
    let output = stateholder_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--print-config")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("confirm_label = \"Apply\""));
    assert!(stdout.contains("tick_rate_ms = 250"));
    assert!(stdout.contains("max = 5"));
}

#[test]
fn test_missing_config_file_exits_with_error() {
    let output = stateholder_cmd()
        .arg("--config")
        .arg("/nonexistent/stateholder.toml")
        .arg("--print-config")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: could not load configuration"));
    assert!(stderr.contains("does not exist"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, path) = temp_config("[count_choices]\nmin = 3\nmax = 1\n");
    let output = stateholder_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--print-config")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config validation failed"));
}

#[test]
fn test_missing_config_value_shows_error() {
    let output = stateholder_cmd()
        .arg("--config")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("a value is required") || stderr.contains("requires a value"),
        "Expected clap error about missing value, got: {}",
        stderr
    );
}
