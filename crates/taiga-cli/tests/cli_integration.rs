use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn taiga() -> Command {
    let mut cmd = Command::cargo_bin("taiga").unwrap();
    cmd.env_remove("TAIGA_PROJECT")
        .env_remove("TAIGA_PASSWORD")
        .env_remove("TAIGA_USERNAME")
        .env_remove("TAIGA_CONFIG")
        .env_remove("TAIGA_DEBUG_LOG");
    cmd
}

#[test]
fn test_help_lists_connection_flags() {
    taiga()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--project"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_completions_bash() {
    taiga()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("taiga"));
}

#[test]
fn test_missing_project_is_reported() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[auth]\nusername = \"ana\"\n").unwrap();

    taiga()
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--project"));
}

#[test]
fn test_malformed_config_is_reported() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[host\nport = ").unwrap();

    taiga()
        .args(["--config", config.to_str().unwrap(), "--project", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.toml"));
}

#[test]
fn test_conflicting_key_bindings_are_reported() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[keys.milestone]\nreload = \"q\"\n").unwrap();

    taiga()
        .args(["--config", config.to_str().unwrap(), "--project", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bound to both"));
}
