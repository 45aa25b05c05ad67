//! HTTP-level tests for the OpenAI client using a mock server.

use keycheck::domain::models::KeyStatus;
use keycheck::domain::ports::KeyValidator;
use keycheck::infrastructure::openai::{OpenAiClient, OpenAiClientConfig};

fn client_for(server: &mockito::ServerGuard) -> OpenAiClient {
    OpenAiClient::new(OpenAiClientConfig {
        base_url: server.url(),
        timeout_secs: 5,
        ..OpenAiClientConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_success_is_valid() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/models")
        .match_header("authorization", "Bearer sk-test-valid-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"object":"list","data":[{"id":"gpt-4o","object":"model"}]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let status = client.validate("sk-test-valid-key").await;

    assert_eq!(status, KeyStatus::Valid);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized_is_invalid_key() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/models")
        .with_status(401)
        .with_body(
            r#"{"error":{"message":"Incorrect API key provided: sk-test. Invalid API key.","type":"invalid_request_error"}}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let status = client.validate("sk-test").await;

    assert_eq!(status, KeyStatus::InvalidKey);
}

#[tokio::test]
async fn test_quota_exhausted_is_no_credits() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/models")
        .with_status(429)
        .with_body(
            r#"{"error":{"message":"You exceeded your current quota, please check your plan and billing details.","type":"insufficient_quota"}}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let status = client.validate("sk-test").await;

    assert_eq!(status, KeyStatus::NoCredits);
}

#[tokio::test]
async fn test_throttled_is_rate_limited() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/models")
        .with_status(429)
        .with_body(
            r#"{"error":{"message":"Rate limit reached for requests","type":"requests"}}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let status = client.validate("sk-test").await;

    assert_eq!(status, KeyStatus::RateLimited);
}

#[tokio::test]
async fn test_unrecognized_failure_keeps_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/models")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let client = client_for(&server);
    let status = client.validate("sk-test").await;

    match status {
        KeyStatus::Error(message) => {
            assert!(message.contains("500"));
            assert!(message.contains("upstream exploded"));
        }
        other => panic!("expected Error status, got {:?}", other),
    }
}

#[tokio::test]
async fn test_key_is_trimmed_before_sending() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/models")
        .match_header("authorization", "Bearer sk-padded-key")
        .with_status(200)
        .with_body(r#"{"object":"list","data":[]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let status = client.validate("  sk-padded-key  ").await;

    assert_eq!(status, KeyStatus::Valid);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_custom_rules_override_classification() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/models")
        .with_status(403)
        .with_body("account suspended")
        .create_async()
        .await;

    let client = OpenAiClient::new(OpenAiClientConfig {
        base_url: server.url(),
        timeout_secs: 5,
        rules: vec![keycheck::ClassificationRule::new(
            "suspended",
            KeyStatus::InvalidKey,
        )],
    })
    .unwrap();

    let status = client.validate("sk-test").await;
    assert_eq!(status, KeyStatus::InvalidKey);
}
