//! Connection seam between a [`Session`](crate::Session) and the orchestrator.
//!
//! A [`Transport`] moves JSON text frames over one live connection; a
//! [`Connector`] opens new ones so the session can reconnect.
//!
//! | Implementation        | Availability          |
//! |-----------------------|-----------------------|
//! | [`WebSocketTransport`] | always               |
//! | `ChannelTransport`    | `test-utils` feature  |

mod websocket;

#[cfg(any(test, feature = "test-utils"))]
pub mod channel;

pub use websocket::{WebSocketConnector, WebSocketTransport};

use crate::error::SessionError;
use std::future::Future;

/// One live connection carrying text frames.
pub trait Transport: Send {
    /// Sends one text frame.
    fn send(&mut self, frame: String) -> impl Future<Output = Result<(), SessionError>> + Send;

    /// Receives the next text frame.
    ///
    /// Resolves to `Ok(None)` once the peer has closed the connection.
    /// Control frames are handled internally and never surface here.
    fn recv(&mut self) -> impl Future<Output = Result<Option<String>, SessionError>> + Send;
}

/// Opens connections to the orchestrator.
pub trait Connector: Send + Sync {
    /// The connection type produced.
    type Transport: Transport;

    /// Opens a new connection.
    fn connect(&self) -> impl Future<Output = Result<Self::Transport, SessionError>> + Send;
}
