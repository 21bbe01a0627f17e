//! CLI integration tests

use std::process::Command;

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "carbonshift-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(
        stdout.contains("CarbonShift Simulator"),
        "Should show app name"
    );
    assert!(stdout.contains("simulate"), "Should show simulate command");
    assert!(stdout.contains("metadata"), "Should show metadata command");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = Command::new("cargo")
        .args(["run", "-p", "carbonshift-cli", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("cshift"), "Should show binary name");
}

/// Test simulate subcommand help
#[test]
fn test_simulate_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "carbonshift-cli", "--", "simulate", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Simulate help should succeed");
    assert!(
        stdout.contains("--provider"),
        "Should show provider option"
    );
    assert!(
        stdout.contains("--instance-type"),
        "Should show instance-type option"
    );
    assert!(stdout.contains("--region"), "Should show region option");
    assert!(stdout.contains("--count"), "Should show count option");
    assert!(stdout.contains("--cpu"), "Should show cpu option");
    assert!(stdout.contains("--hours"), "Should show hours option");
    assert!(stdout.contains("--location"), "Should show location option");
    assert!(
        stdout.contains("--carbon-weight"),
        "Should show carbon-weight option"
    );
    assert!(
        stdout.contains("--compliance-weight"),
        "Should show compliance-weight option"
    );
}

/// Test metadata instances subcommand help
#[test]
fn test_metadata_instances_help() {
    let output = Command::new("cargo")
        .args([
            "run",
            "-p",
            "carbonshift-cli",
            "--",
            "metadata",
            "instances",
            "--help",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(
        output.status.success(),
        "Metadata instances help should succeed"
    );
}

/// Test metadata regions subcommand help
#[test]
fn test_metadata_regions_help() {
    let output = Command::new("cargo")
        .args([
            "run",
            "-p",
            "carbonshift-cli",
            "--",
            "metadata",
            "regions",
            "--help",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(
        output.status.success(),
        "Metadata regions help should succeed"
    );
}

/// Test format option
#[test]
fn test_format_option() {
    let output = Command::new("cargo")
        .args(["run", "-p", "carbonshift-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("--format"), "Should show format option");
    assert!(stdout.contains("table"), "Should show table format");
    assert!(stdout.contains("json"), "Should show json format");
}

/// Test api-url option
#[test]
fn test_api_url_option() {
    let output = Command::new("cargo")
        .args(["run", "-p", "carbonshift-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("--api-url"), "Should show api-url option");
    assert!(stdout.contains("CSHIFT_API_URL"), "Should show env var");
}

/// Test invalid command error handling
#[test]
fn test_invalid_command() {
    let output = Command::new("cargo")
        .args(["run", "-p", "carbonshift-cli", "--", "invalid-command"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("invalid"),
        "Should show error message"
    );
}

/// Test missing subcommand error handling
#[test]
fn test_missing_subcommand() {
    let output = Command::new("cargo")
        .args(["run", "-p", "carbonshift-cli", "--", "metadata"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Missing subcommand should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Usage") || stderr.contains("error"),
        "Should show usage"
    );
}
