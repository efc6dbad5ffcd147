//! Wire-level tests for the Gemini client against a local mock server.

mod common;

use babel_model_providers::{GeminiClient, GeminiProvider};
use babel_models::llm::{GenerationError, Llm};
use common::text_body;
use core::time::Duration;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn llm_for(server: &MockServer) -> Llm {
    let client = GeminiClient::new("test-key").with_base_url(server.uri());
    Llm::new(Arc::new(GeminiProvider::from_client(client)), "gemini-2.5-flash")
}

#[tokio::test]
async fn sends_prompt_with_api_key_and_returns_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "Translate this"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body("  Bonjour \n")))
        .expect(1)
        .mount(&server)
        .await;

    let text = llm_for(&server).generate_text("Translate this").await.unwrap();
    assert_eq!(text, "  Bonjour \n");
}

#[tokio::test]
async fn non_success_status_becomes_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"code": 500, "message": "backend unavailable", "status": "INTERNAL"}
        })))
        .mount(&server)
        .await;

    let err = llm_for(&server).generate_text("hi").await.unwrap_err();
    match err {
        GenerationError::Provider {
            status, message, ..
        } => {
            assert_eq!(status, Some(500));
            assert_eq!(message, "INTERNAL: backend unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn invalid_key_is_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}
        })))
        .mount(&server)
        .await;

    let err = llm_for(&server).generate_text("hi").await.unwrap_err();
    assert!(matches!(err, GenerationError::Auth(msg) if msg.contains("API key not valid")));
}

#[tokio::test]
async fn rate_limit_reads_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "12"))
        .mount(&server)
        .await;

    let err = llm_for(&server).generate_text("hi").await.unwrap_err();
    assert!(matches!(
        err,
        GenerationError::RateLimited { retry_after: Some(d) } if d == Duration::from_secs(12)
    ));
}

#[tokio::test]
async fn unparseable_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = llm_for(&server).generate_text("hi").await.unwrap_err();
    assert!(matches!(err, GenerationError::InvalidResponse(msg) if msg.contains("not json")));
}

#[tokio::test]
async fn large_unparseable_body_is_cut_in_the_error() {
    let server = MockServer::start().await;
    let body = format!("<html>{}</html>", "a".repeat(20_000));
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let err = llm_for(&server).generate_text("hi").await.unwrap_err();
    let message = match err {
        GenerationError::InvalidResponse(message) => message,
        other => panic!("unexpected error: {other:?}"),
    };
    assert!(message.contains("<html>aaa"));
    assert!(!message.contains("</html>"));
    assert!(message.len() < 1_000, "message not cut: {} bytes", message.len());
}

#[tokio::test]
async fn slow_response_times_out_as_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(text_body("late"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = GeminiClient::new("test-key")
        .with_base_url(server.uri())
        .with_timeout(Duration::from_millis(100));
    let llm = Llm::new(Arc::new(GeminiProvider::from_client(client)), "gemini-2.5-flash");

    let err = llm.generate_text("hi").await.unwrap_err();
    assert!(matches!(err, GenerationError::Http(msg) if msg.contains("timed out")));
}
