//! In-memory transport for tests.
//!
//! [`ChannelTransport::pair`] returns the agent end and a [`ChannelPeer`] that
//! plays the orchestrator.

use super::{Connector, Transport};
use crate::error::SessionError;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::mpsc;

/// Agent side of an in-memory connection.
#[derive(Debug)]
pub struct ChannelTransport {
    incoming: mpsc::UnboundedReceiver<String>,
    outgoing: mpsc::UnboundedSender<String>,
}

/// Orchestrator side of an in-memory connection.
///
/// Dropping the peer closes the connection.
#[derive(Debug)]
pub struct ChannelPeer {
    to_agent: mpsc::UnboundedSender<String>,
    from_agent: mpsc::UnboundedReceiver<String>,
}

impl ChannelTransport {
    /// Creates a connected transport/peer pair.
    #[must_use]
    pub fn pair() -> (Self, ChannelPeer) {
        let (to_agent, incoming) = mpsc::unbounded_channel();
        let (outgoing, from_agent) = mpsc::unbounded_channel();
        (
            Self { incoming, outgoing },
            ChannelPeer {
                to_agent,
                from_agent,
            },
        )
    }
}

impl Transport for ChannelTransport {
    async fn send(&mut self, frame: String) -> Result<(), SessionError> {
        self.outgoing
            .send(frame)
            .map_err(|_| SessionError::ConnectionClosed)
    }

    async fn recv(&mut self) -> Result<Option<String>, SessionError> {
        Ok(self.incoming.recv().await)
    }
}

impl ChannelPeer {
    /// Sends a raw text frame to the agent.
    ///
    /// # Panics
    ///
    /// Panics if the agent side has been dropped.
    pub fn send_raw(&self, frame: impl Into<String>) {
        self.to_agent
            .send(frame.into())
            .expect("agent side of channel transport dropped");
    }

    /// Sends a JSON frame to the agent.
    ///
    /// # Panics
    ///
    /// Panics if the agent side has been dropped.
    pub fn send_json(&self, frame: &Value) {
        self.send_raw(frame.to_string());
    }

    /// Waits for the next frame from the agent, parsed as JSON.
    ///
    /// Returns `None` once the agent side is gone.
    ///
    /// # Panics
    ///
    /// Panics if the agent sent invalid JSON.
    pub async fn next_json(&mut self) -> Option<Value> {
        let frame = self.from_agent.recv().await?;
        Some(serde_json::from_str(&frame).expect("agent sent invalid JSON"))
    }
}

/// Hands out pre-built [`ChannelTransport`]s, one per connect.
///
/// Once the queue is empty, `connect` fails with
/// [`SessionError::ConnectionClosed`].
#[derive(Debug, Default)]
pub struct ChannelConnector {
    queue: Mutex<VecDeque<ChannelTransport>>,
}

impl ChannelConnector {
    /// Creates a connector that yields the given transports in order.
    #[must_use]
    pub fn new(transports: impl IntoIterator<Item = ChannelTransport>) -> Self {
        Self {
            queue: Mutex::new(transports.into_iter().collect()),
        }
    }

    /// Returns the number of transports not yet handed out.
    ///
    /// # Panics
    ///
    /// Panics if the queue lock is poisoned.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.lock().expect("ChannelConnector lock poisoned").len()
    }
}

impl Connector for ChannelConnector {
    type Transport = ChannelTransport;

    async fn connect(&self) -> Result<ChannelTransport, SessionError> {
        self.queue
            .lock()
            .expect("ChannelConnector lock poisoned")
            .pop_front()
            .ok_or(SessionError::ConnectionClosed)
    }
}
