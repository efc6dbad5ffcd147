//! Shared test helpers for provider integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset of helpers")]

use std::future::Future;
use std::sync::Once;

use babel_models::llm::{GenerationRequest, Llm};

static INIT: Once = Once::new();

/// Initialize environment variables from `.env` file (once).
pub fn init_env() {
    INIT.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

/// A minimal successful `generateContent` body carrying `text`.
pub fn text_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 5, "candidatesTokenCount": 1, "totalTokenCount": 6}
    })
}

/// Extension trait for testing LLM providers.
pub trait LlmTestExt {
    /// Tests basic generation - expects the model to say "hello".
    fn test_basic_generation(&self) -> impl Future<Output = ()> + Send;

    /// Tests generation with a system prompt.
    fn test_system_prompt(&self) -> impl Future<Output = ()> + Send;

    /// Tests a short translation prompt.
    fn test_translation(&self) -> impl Future<Output = ()> + Send;

    /// Tests that an invalid model returns an error.
    fn test_invalid_model_error(&self) -> impl Future<Output = ()> + Send;
}

impl LlmTestExt for Llm {
    async fn test_basic_generation(&self) {
        let request = GenerationRequest::new("Say 'hello' and nothing else.");

        let response = self
            .generate(request)
            .await
            .expect("generation should succeed");

        let text = response.text().to_lowercase();
        assert!(
            text.contains("hello"),
            "response should contain 'hello': {text}"
        );
    }

    async fn test_system_prompt(&self) {
        let request = GenerationRequest::with_system(
            "You are a pirate. Always respond in pirate speak.",
            "Say hello",
        );

        let response = self
            .generate(request)
            .await
            .expect("generation should succeed");

        assert!(!response.text().is_empty(), "response should not be empty");
    }

    async fn test_translation(&self) {
        let text = self
            .generate_text(
                "Translate 'Good morning' from English to French. Reply with only the translation.",
            )
            .await
            .expect("generation should succeed");

        assert!(
            text.to_lowercase().contains("bonjour"),
            "response should contain 'bonjour': {text}"
        );
    }

    async fn test_invalid_model_error(&self) {
        let request = GenerationRequest::new("Hello");
        let result = self.generate(request).await;

        assert!(result.is_err(), "should fail with invalid model");
    }
}
