//! Session error types.

use tokio_tungstenite::tungstenite;

/// Errors raised while connecting to or talking with the orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The orchestrator URL could not be used.
    #[error("invalid orchestrator url '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The token cannot be sent as an HTTP header value.
    #[error("orchestrator token contains characters not allowed in a header")]
    InvalidToken,

    /// WebSocket handshake or framing failure.
    #[error("websocket error: {0}")]
    WebSocket(Box<tungstenite::Error>),

    /// A frame could not be encoded.
    #[error("failed to encode frame: {0}")]
    Encode(#[from] serde_json::Error),

    /// The peer went away while a frame was being sent.
    #[error("connection closed")]
    ConnectionClosed,

    /// The reconnect policy gave up.
    #[error("gave up reconnecting after {attempts} attempts")]
    ReconnectExhausted {
        /// Number of reconnect attempts made.
        attempts: u32,
    },
}

impl SessionError {
    /// Returns `true` if retrying the connection cannot succeed.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl { .. } | Self::InvalidToken | Self::ReconnectExhausted { .. }
        )
    }
}

impl From<tungstenite::Error> for SessionError {
    fn from(err: tungstenite::Error) -> Self {
        match err {
            tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed => {
                Self::ConnectionClosed
            }
            other => Self::WebSocket(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_classification() {
        assert!(SessionError::InvalidToken.is_fatal());
        assert!(SessionError::ReconnectExhausted { attempts: 3 }.is_fatal());
        assert!(!SessionError::ConnectionClosed.is_fatal());
    }

    #[test]
    fn closed_websocket_maps_to_connection_closed() {
        let err = SessionError::from(tungstenite::Error::ConnectionClosed);
        assert!(matches!(err, SessionError::ConnectionClosed));
    }

    #[test]
    fn display_messages() {
        let err = SessionError::InvalidUrl {
            url: "http://x".into(),
            reason: "scheme must be ws or wss".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid orchestrator url 'http://x': scheme must be ws or wss"
        );
        assert_eq!(
            SessionError::ReconnectExhausted { attempts: 2 }.to_string(),
            "gave up reconnecting after 2 attempts"
        );
    }
}
