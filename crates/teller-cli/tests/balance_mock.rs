use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn account_response() -> serde_json::Value {
    serde_json::json!({
        "name": "Alice",
        "balance": 100.0,
        "lastUpdated": 1_700_000_000.0
    })
}

#[tokio::test]
async fn test_balance_prints_formatted_account() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/authenticate"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "name": "Alice",
            "pin": "1234"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let home = tempfile::tempdir().unwrap();
    cargo_bin_cmd!("teller")
        .env("TELLER_HOME", home.path())
        .env("TELLER_API_BASE_URL", mock_server.uri())
        .args(["balance", "--name", "Alice", "--pin", "1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("$100.00"))
        .stdout(predicate::str::contains("Last updated: Today at "));
}

#[tokio::test]
async fn test_balance_trims_the_account_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/authenticate"))
        .and(body_json(serde_json::json!({
            "name": "Alice",
            "pin": "1234"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let home = tempfile::tempdir().unwrap();
    cargo_bin_cmd!("teller")
        .env("TELLER_HOME", home.path())
        .env("TELLER_API_BASE_URL", mock_server.uri())
        .args(["balance", "--name", "  Alice ", "--pin", "1234"])
        .assert()
        .success();
}

#[tokio::test]
async fn test_balance_surfaces_server_detail_on_rejection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/authenticate"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"detail": "Invalid username or PIN"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let home = tempfile::tempdir().unwrap();
    cargo_bin_cmd!("teller")
        .env("TELLER_HOME", home.path())
        .env("TELLER_API_BASE_URL", mock_server.uri())
        .args(["balance", "--name", "Alice", "--pin", "9999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username or PIN"));
}

#[tokio::test]
async fn test_balance_flag_overrides_env_base_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/authenticate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let uri = mock_server.uri();
    cargo_bin_cmd!("teller")
        .env("TELLER_HOME", home.path())
        .env("TELLER_API_BASE_URL", "http://127.0.0.1:9")
        .args([
            "balance",
            "--base-url",
            uri.as_str(),
            "--name",
            "Alice",
            "--pin",
            "1234",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$100.00"));
}

#[tokio::test]
async fn test_balance_requires_name_and_pin() {
    let home = tempfile::tempdir().unwrap();

    // A blank name must fail the local pre-check; nothing is sent.
    cargo_bin_cmd!("teller")
        .env("TELLER_HOME", home.path())
        .env("TELLER_API_BASE_URL", "http://127.0.0.1:9")
        .args(["balance", "--name", "  ", "--pin", "1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name and PIN are required."));
}
