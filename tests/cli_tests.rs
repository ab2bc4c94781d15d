//! CLI tests that never reach the interactive terminal

use assert_cmd::Command;
use predicates::prelude::*;

fn jex() -> Command {
    let mut cmd = Command::cargo_bin("jex").unwrap();
    // Keep the user's own config file out of the way
    cmd.env("XDG_CONFIG_HOME", "tests/fixtures");
    cmd
}

#[test]
fn test_help_lists_options() {
    jex()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--engine"))
        .stdout(predicate::str::contains("--debounce-ms"))
        .stdout(predicate::str::contains("--query"));
}

#[test]
fn test_version() {
    jex()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_json_file_is_rejected() {
    jex()
        .arg("tests/fixtures/invalid.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON input"));
}

#[test]
fn test_invalid_json_on_stdin_is_rejected() {
    jex()
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON input"));
}

#[test]
fn test_missing_file_is_rejected() {
    jex()
        .arg("tests/fixtures/does-not-exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_unknown_engine_is_rejected() {
    jex()
        .args(["--engine", "xpath", "tests/fixtures/simple.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
