use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".classdash").join("config.json")
}

const BINARY_NAME: &str = "classdash";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// A blank name is rejected by local validation, before any request could
/// be made (no backend is running in this test).
fn add_rejects_blank_name_before_any_request() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("add").arg("--name").arg("   ");
    cmd.assert()
        .failure()
        .stdout(contains("Enter the student name"));
}

#[test]
/// Declining the confirmation prompt aborts before any DELETE is issued
/// (again, no backend is running here).
fn remove_declined_at_prompt_sends_nothing() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("remove").arg("--name").arg("Ana");
    cmd.write_stdin("n\n");
    cmd.assert().success().stdout(contains("Removal aborted"));
}

#[test]
/// set-backend persists the address; reset deletes the config file.
fn set_backend_then_reset_round_trip() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("set-backend")
        .arg("http://127.0.0.1:9999")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Backend saved"));

    assert!(config_path.exists());
    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("http://127.0.0.1:9999"));

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Clearing saved configuration"));

    assert!(!config_path.exists());
}

#[test]
/// Backend addresses must be "local" or an http(s) URL.
fn set_backend_rejects_garbage() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("set-backend")
        .arg("classroom")
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stdout(contains("Invalid backend address"));
}
