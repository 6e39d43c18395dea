use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("teller")
        .env("TELLER_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("teller")
        .env("TELLER_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    assert!(config_path.exists());

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("api_base_url ="));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    fs::write(&config_path, "# existing config").unwrap();

    cargo_bin_cmd!("teller")
        .env("TELLER_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_configured_base_url_is_used() {
    let dir = tempdir().unwrap();
    // Point the config at a closed port; the command should fail with the
    // generic transport message rather than hanging on the default URL.
    fs::write(
        dir.path().join("config.toml"),
        "api_base_url = \"http://127.0.0.1:9\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("teller")
        .env("TELLER_HOME", dir.path())
        .env_remove("TELLER_API_BASE_URL")
        .args(["balance", "--name", "Alice", "--pin", "1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("An unknown error occurred."));
}
