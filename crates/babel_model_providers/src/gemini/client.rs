//! Gemini API client.

use super::types::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};
use babel_models::llm::GenerationError;
use core::time::Duration;
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, RETRY_AFTER};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Longest prefix of a response body carried into error messages.
const MAX_BODY_EXCERPT_CHARS: usize = 256;

/// HTTP client for the Gemini `generateContent` API.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl GeminiClient {
    /// Creates a new client against the public endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Overrides the API base URL (scheme and host, no trailing path).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets a per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a `generateContent` request for `model`.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let url = format!("{}/v1beta/models/{model}:generateContent", self.base_url);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|err| GenerationError::Auth(format!("Invalid API key header: {err}")))?,
        );

        let mut builder = self.client.post(&url).headers(headers).json(request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        tracing::debug!(model, url = %url, "sending generateContent request");

        let response = builder
            .send()
            .await
            .map_err(|err| GenerationError::Http(describe_transport_error(&err)))?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(Duration::from_secs);
        let body = response
            .text()
            .await
            .map_err(|err| GenerationError::Http(describe_transport_error(&err)))?;

        if !status.is_success() {
            return Err(status_error(status, &body, retry_after));
        }

        serde_json::from_str(&body).map_err(|err| {
            GenerationError::InvalidResponse(format!(
                "Failed to parse response: {err}\nBody: {}",
                excerpt(&body)
            ))
        })
    }
}

fn excerpt(body: &str) -> String {
    let mut chars = body.chars();
    let mut head: String = chars.by_ref().take(MAX_BODY_EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        head.push_str("...");
    }
    head
}

fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {err}")
    } else {
        err.to_string()
    }
}

fn status_error(status: StatusCode, body: &str, retry_after: Option<Duration>) -> GenerationError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|envelope| match envelope.error.status {
            Some(code) => format!("{code}: {}", envelope.error.message),
            None => envelope.error.message,
        })
        .unwrap_or_else(|| excerpt(body));

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenerationError::Auth(message),
        StatusCode::TOO_MANY_REQUESTS => GenerationError::RateLimited { retry_after },
        _ => GenerationError::Provider {
            status: Some(status.as_u16()),
            message,
            source: None,
        },
    }
}

impl core::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let client = GeminiClient::new("secret-key");
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = GeminiClient::new("k").with_base_url("http://localhost:9000/");
        assert_eq!(client.base_url(), "http://localhost:9000");
    }

    #[test]
    fn excerpt_keeps_short_bodies_and_cuts_long_ones() {
        assert_eq!(excerpt("not json"), "not json");

        let long = "é".repeat(MAX_BODY_EXCERPT_CHARS + 10);
        let cut = excerpt(&long);
        assert_eq!(cut.chars().count(), MAX_BODY_EXCERPT_CHARS + 3);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn status_error_without_envelope_uses_an_excerpt() {
        let body = "x".repeat(10_000);
        match status_error(StatusCode::BAD_GATEWAY, &body, None) {
            GenerationError::Provider { message, .. } => {
                assert!(message.len() < 300, "message not cut: {} bytes", message.len());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn status_error_prefers_error_envelope_message() {
        let body = r#"{"error":{"code":400,"message":"model not found","status":"NOT_FOUND"}}"#;
        let err = status_error(StatusCode::NOT_FOUND, body, None);
        match err {
            GenerationError::Provider {
                status, message, ..
            } => {
                assert_eq!(status, Some(404));
                assert_eq!(message, "NOT_FOUND: model not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn status_error_maps_auth_and_rate_limits() {
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, "denied", None),
            GenerationError::Auth(msg) if msg == "denied"
        ));
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, "", Some(Duration::from_secs(7))),
            GenerationError::RateLimited { retry_after: Some(d) } if d == Duration::from_secs(7)
        ));
    }
}
