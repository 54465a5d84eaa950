//! CLI tests against mock endpoints.
//!
//! The binary is run as a subprocess; wiremock stands in for both the
//! identity provider and the warehouse.

use std::process::Output;

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const APP_ID: &str = "8d699e29-3b54-4c6a-91cc-e537b4680fed";

/// Run the CLI binary with arguments and no secrets in the environment.
async fn run_cli(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_warehouse"));
    cmd.args(args)
        .env_remove("WAREHOUSE_APP_SECRET")
        .env_remove("WAREHOUSE_PASSWORD")
        .env_remove("WAREHOUSE_URL")
        .env_remove("RUST_LOG");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().await.expect("Failed to execute CLI")
}

async fn mount_warehouse(server: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path("/api/dates"))
        .and(header("authorization", format!("Bearer {}", token).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string("2024-01-01,2024-01-02"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_app_flow_prints_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contoso.com/oauth2/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_secret=cli-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "app-token"
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_warehouse(&server, "app-token").await;

    let uri = server.uri();
    let warehouse = format!("{}/api", uri);
    let output = run_cli(
        &[
            "app",
            "--application-id",
            APP_ID,
            "--tenant",
            "contoso.com",
            "--secret",
            "cli-secret",
            "--authority",
            &uri,
            "--warehouse-url",
            &warehouse,
        ],
        &[],
    )
    .await;

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {}", stderr);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "2024-01-01,2024-01-02"
    );
}

#[tokio::test]
async fn test_user_flow_reads_password_from_env() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/common/oauth2/token"))
        .and(body_string_contains("grant_type=password"))
        .and(body_string_contains("password=env-password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "user-token",
            "expires_in": "3599"
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_warehouse(&server, "user-token").await;

    let uri = server.uri();
    let warehouse = format!("{}/api", uri);
    let output = run_cli(
        &[
            "user",
            "--application-id",
            APP_ID,
            "--username",
            "intuneadmin@contoso.com",
            "--authority",
            &uri,
        ],
        &[
            ("WAREHOUSE_PASSWORD", "env-password"),
            ("WAREHOUSE_URL", warehouse.as_str()),
        ],
    )
    .await;

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {}", stderr);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "2024-01-01,2024-01-02"
    );
}

#[tokio::test]
async fn test_missing_password_fails_without_network() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "unused"
        })))
        .expect(0)
        .mount(&server)
        .await;

    let uri = server.uri();
    let warehouse = format!("{}/api", uri);
    let output = run_cli(
        &[
            "user",
            "--application-id",
            APP_ID,
            "--username",
            "intuneadmin@contoso.com",
            "--authority",
            &uri,
            "--warehouse-url",
            &warehouse,
        ],
        &[],
    )
    .await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No password given"), "stderr: {}", stderr);
}

#[tokio::test]
async fn test_rejected_secret_reports_kind() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contoso.com/oauth2/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_client",
            "error_description": "Invalid client secret is provided."
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let uri = server.uri();
    let warehouse = format!("{}/api", uri);
    let output = run_cli(
        &[
            "app",
            "--application-id",
            APP_ID,
            "--tenant",
            "contoso.com",
            "--authority",
            &uri,
            "--warehouse-url",
            &warehouse,
        ],
        &[("WAREHOUSE_APP_SECRET", "wrong-secret")],
    )
    .await;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("AuthenticationFailed"), "stderr: {}", stderr);
    assert!(stderr.contains("invalid_client"), "stderr: {}", stderr);
    assert!(!stderr.contains("wrong-secret"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[tokio::test]
async fn test_pretty_prints_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contoso.com/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "app-token"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"value":[{"id":1}]}"#))
        .mount(&server)
        .await;

    let uri = server.uri();
    let warehouse = format!("{}/api", uri);
    let output = run_cli(
        &[
            "app",
            "--application-id",
            APP_ID,
            "--tenant",
            "contoso.com",
            "--secret",
            "s",
            "--authority",
            &uri,
            "--warehouse-url",
            &warehouse,
            "--collection",
            "devices",
            "--pretty",
        ],
        &[],
    )
    .await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value, json!({ "value": [{ "id": 1 }] }));
    assert!(stdout.contains("\n  "));
}
