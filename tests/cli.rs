//! Integration tests for the cashpilot CLI surface
//!
//! The dashboard itself needs a terminal, so these tests stick to the
//! non-interactive paths: help output and the `config` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cashpilot() -> Command {
    Command::cargo_bin("cashpilot").unwrap()
}

#[test]
fn help_describes_the_dashboard() {
    cashpilot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("--demo"));
}

#[test]
fn config_prints_paths_and_settings() {
    let temp_dir = TempDir::new().unwrap();

    cashpilot()
        .env("CASHPILOT_CONFIG_DIR", temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cashpilot Configuration"))
        .stdout(predicate::str::contains(temp_dir.path().to_str().unwrap()))
        .stdout(predicate::str::contains("date_format"));
}

#[test]
fn config_dir_flag_overrides_default_location() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("settings.json"),
        r#"{"schema_version":1,"date_format":"%d/%m/%Y","tick_rate_ms":100}"#,
    )
    .unwrap();

    cashpilot()
        .arg("--config-dir")
        .arg(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("%d/%m/%Y"));
}

#[test]
fn config_does_not_create_the_settings_file() {
    let temp_dir = TempDir::new().unwrap();

    cashpilot()
        .env("CASHPILOT_CONFIG_DIR", temp_dir.path())
        .arg("config")
        .assert()
        .success();

    // Only the dashboard launch persists defaults
    assert!(!temp_dir.path().join("settings.json").exists());
}

#[test]
fn malformed_settings_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("settings.json"), "{not json").unwrap();

    cashpilot()
        .env("CASHPILOT_CONFIG_DIR", temp_dir.path())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("settings file"));
}
