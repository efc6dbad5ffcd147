use super::{Connector, Transport};
use crate::config::SessionConfig;
use crate::error::SessionError;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::http::header::AUTHORIZATION;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

/// A WebSocket connection to the orchestrator.
pub struct WebSocketTransport {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl core::fmt::Debug for WebSocketTransport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WebSocketTransport").finish_non_exhaustive()
    }
}

impl WebSocketTransport {
    /// Connects to `url`, sending `Authorization: Bearer <token>` when a
    /// token is given.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidUrl`] or [`SessionError::InvalidToken`]
    /// if the upgrade request cannot be built, and
    /// [`SessionError::WebSocket`] if the handshake fails.
    pub async fn connect(url: &str, jwt_token: Option<&str>) -> Result<Self, SessionError> {
        let mut request =
            url.into_client_request()
                .map_err(|err| SessionError::InvalidUrl {
                    url: url.to_string(),
                    reason: err.to_string(),
                })?;

        if let Some(token) = jwt_token.filter(|token| !token.is_empty()) {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| SessionError::InvalidToken)?;
            request.headers_mut().insert(AUTHORIZATION, value);
        }

        let (stream, response) = connect_async(request).await?;
        tracing::debug!(url, status = %response.status(), "websocket handshake complete");
        Ok(Self { stream })
    }
}

impl Transport for WebSocketTransport {
    async fn send(&mut self, frame: String) -> Result<(), SessionError> {
        self.stream.send(Message::Text(frame.into())).await?;
        Ok(())
    }

    async fn recv(&mut self) -> Result<Option<String>, SessionError> {
        while let Some(message) = self.stream.next().await {
            match message? {
                Message::Text(text) => return Ok(Some(text.to_string())),
                Message::Binary(bytes) => match String::from_utf8(bytes.to_vec()) {
                    Ok(text) => return Ok(Some(text)),
                    Err(_) => tracing::warn!(len = bytes.len(), "skipping non-UTF-8 binary frame"),
                },
                Message::Close(frame) => {
                    tracing::debug!(?frame, "orchestrator sent close frame");
                    return Ok(None);
                }
                Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => {}
            }
        }
        Ok(None)
    }
}

/// Opens [`WebSocketTransport`]s from a [`SessionConfig`].
#[derive(Debug, Clone)]
pub struct WebSocketConnector {
    config: SessionConfig,
}

impl WebSocketConnector {
    /// Creates a connector for the configured URL and token.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }
}

impl Connector for WebSocketConnector {
    type Transport = WebSocketTransport;

    async fn connect(&self) -> Result<WebSocketTransport, SessionError> {
        WebSocketTransport::connect(self.config.url(), self.config.jwt_token()).await
    }
}
