#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the CLI binary starts correctly and
//! responds to non-interactive commands without crashing.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn esgen(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("esgen").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_STATE_HOME", home.path().join("state"))
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    esgen(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ESGenerator"))
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("routes"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    esgen(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_routes_list() {
    let home = TempDir::new().unwrap();
    esgen(&home)
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("/editor"))
        .stdout(predicate::str::contains("/forgot-password"))
        .stdout(predicate::str::contains("/reset-password/:token"));
}

#[test]
fn test_open_external_view_prints_url() {
    let home = TempDir::new().unwrap();
    esgen(&home)
        .args(["open", "/editor", "--base-url", "https://esg.example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://esg.example.com/editor"));
}

#[test]
fn test_open_unknown_path_is_usage_error() {
    let home = TempDir::new().unwrap();
    esgen(&home)
        .args(["open", "/admin"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("No view at '/admin'"));
}

#[test]
fn test_config_shows_defaults() {
    let home = TempDir::new().unwrap();
    esgen(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:5000/chat"))
        .stdout(predicate::str::contains("not created"));
}

#[test]
fn test_config_init_then_refuse_overwrite() {
    let home = TempDir::new().unwrap();
    esgen(&home)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration written"));

    assert!(home.path().join("config/esgen/config.toml").exists());

    esgen(&home)
        .args(["config", "--init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_invalid_base_url_fails() {
    let home = TempDir::new().unwrap();
    esgen(&home)
        .args(["config", "--base-url", "ftp://example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ftp"));
}
