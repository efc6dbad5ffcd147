//! Error types for LLM generation operations.

use core::time::Duration;

/// Errors for LLM generation operations.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Http error (e.g.: connection error, timeout, etc.)
    #[error("http error: {0}")]
    Http(String),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Authentication failed.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Rate limited by the provider.
    #[error("rate limited{}", .retry_after.map(|d| format!(", retry after {d:?}")).unwrap_or_default())]
    RateLimited {
        /// Suggested time to wait before retrying.
        retry_after: Option<Duration>,
    },

    /// Error building the request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The response was malformed or carried no usable content.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The model refused to fulfill the request (e.g. content policy).
    #[error("model refused the request: {0}")]
    Refusal(String),

    /// Error returned by the model provider.
    #[error("provider error: {message}")]
    Provider {
        /// HTTP status code if available.
        status: Option<u16>,
        /// Error message.
        message: String,
        /// The underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_display_includes_retry_hint() {
        let err = GenerationError::RateLimited {
            retry_after: Some(Duration::from_secs(3)),
        };
        assert_eq!(err.to_string(), "rate limited, retry after 3s");

        let err = GenerationError::RateLimited { retry_after: None };
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn provider_display_uses_message() {
        let err = GenerationError::Provider {
            status: Some(500),
            message: "internal".to_string(),
            source: None,
        };
        assert_eq!(err.to_string(), "provider error: internal");
    }
}
