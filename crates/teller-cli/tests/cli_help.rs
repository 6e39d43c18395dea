use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("teller")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("balance"))
        .stdout(predicate::str::contains("send"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_send_help_shows_flags() {
    cargo_bin_cmd!("teller")
        .args(["send", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("--amount"))
        .stdout(predicate::str::contains("--pin"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("teller")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("teller")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}
