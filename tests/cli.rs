use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".finance-dashboard").join("config.json")
}

const BINARY_NAME: &str = "finance-dashboard";

fn command(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()); // simulate different $HOME
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
/// Help command should list the subcommands.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("start"))
        .stdout(contains("snapshot"))
        .stdout(contains("configure"))
        .stdout(contains("reset"));
}

#[test]
/// Snapshot prints the static content and marks the default timeframe.
fn snapshot_prints_dashboard() {
    let tmp = temp_home_dir();
    command(&tmp)
        .args(["snapshot", "--seed", "7"])
        .assert()
        .success()
        .stdout(contains("FINANCIAL DASHBOARD"))
        .stdout(contains("$12,345"))
        .stdout(contains("1W [1M] 3M 1Y ALL"))
        .stdout(contains("Dec"))
        .stdout(contains("Transaction #9012"));
}

#[test]
/// Timeframe arguments are case-insensitive and show up as the selection.
fn snapshot_selects_requested_timeframe() {
    let tmp = temp_home_dir();
    command(&tmp)
        .args(["snapshot", "--timeframe", "all", "--seed", "7"])
        .assert()
        .success()
        .stdout(contains("1W 1M 3M 1Y [ALL]"))
        .stdout(contains("Selected timeframe ALL"));
}

#[test]
/// Unknown timeframes are rejected before anything is printed.
fn snapshot_rejects_unknown_timeframe() {
    let tmp = temp_home_dir();
    command(&tmp)
        .args(["snapshot", "--timeframe", "2W"])
        .assert()
        .failure();
}

#[test]
/// The same seed always prints the same dashboard.
fn snapshot_is_reproducible_with_seed() {
    let tmp = temp_home_dir();
    let first = command(&tmp)
        .args(["snapshot", "--seed", "123"])
        .output()
        .unwrap();
    let second = command(&tmp)
        .args(["snapshot", "--seed", "123"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
/// Configure writes the config file and snapshot picks up the saved variant.
fn configure_saves_variant() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    command(&tmp)
        .args(["configure", "--variant", "drawer", "--with-background", "true"])
        .assert()
        .success()
        .stdout(contains("Configuration saved"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("\"drawer\""));
    assert!(saved.contains("\"with_background_color\": true"));

    command(&tmp)
        .args(["snapshot", "--seed", "1"])
        .assert()
        .success()
        .stdout(contains("Menu: Dashboard | Analytics | Settings | Help"));
}

#[test]
/// Debug diagnostics reach stderr when RUST_LOG asks for them, leaving stdout clean.
fn snapshot_emits_debug_records_with_rust_log() {
    let tmp = temp_home_dir();
    command(&tmp)
        .env("RUST_LOG", "debug")
        .args(["snapshot", "--timeframe", "1W", "--seed", "1"])
        .assert()
        .success()
        .stderr(contains("Regenerated revenue series for 1W"))
        .stdout(contains("Regenerated revenue series").not());

    command(&tmp)
        .args(["snapshot", "--timeframe", "1W", "--seed", "1"])
        .assert()
        .success()
        .stderr(contains("Regenerated revenue series").not());
}

#[test]
/// Config writes are logged at info level by default.
fn configure_logs_config_write() {
    let tmp = temp_home_dir();
    command(&tmp)
        .args(["configure", "--variant", "drawer"])
        .assert()
        .success()
        .stderr(contains("Saved config to"));
}

#[test]
/// A broken config file is reported instead of silently ignored.
fn snapshot_fails_on_invalid_config() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "not json").unwrap();

    command(&tmp)
        .arg("snapshot")
        .assert()
        .failure()
        .stderr(contains("Failed to load config"));
}

#[test]
/// Reset command should delete an existing config file.
fn reset_deletes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    command(&tmp)
        .arg("reset")
        .assert()
        .success()
        .stdout(contains("Resetting configuration"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}
