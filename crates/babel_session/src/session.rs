//! Registration, dispatch and the reconnect loop.

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::protocol::{InboundMessage, OutboundMessage};
use crate::transport::{Connector, Transport, WebSocketConnector};
use babel_tools::{ToolContext, ToolRegistry};
use core::any::Any;
use core::panic::AssertUnwindSafe;
use futures::FutureExt;
use serde_json::{Map, Value, json};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Longest prefix of a rejected frame echoed into the logs.
const MAX_LOGGED_FRAME_CHARS: usize = 256;

/// Builds a [`Session`].
///
/// The registry is mutable only here; [`SessionBuilder::build`] freezes it.
#[derive(Debug)]
pub struct SessionBuilder {
    config: SessionConfig,
    tools: ToolRegistry,
}

impl SessionBuilder {
    /// Replaces the tool registry.
    #[must_use]
    pub fn with_tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }

    /// Validates the configuration and freezes the registry.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidUrl`] if the orchestrator URL is not a
    /// `ws`/`wss` URL.
    pub fn build(self) -> Result<Session, SessionError> {
        self.config.validate()?;
        if self.tools.is_empty() {
            tracing::warn!("session built with no tools registered");
        }
        Ok(Session {
            config: self.config,
            tools: Arc::new(self.tools),
        })
    }
}

/// A long-running agent connected to an orchestrator.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    tools: Arc<ToolRegistry>,
}

impl Session {
    /// Starts building a session.
    #[must_use]
    pub fn builder(config: SessionConfig) -> SessionBuilder {
        SessionBuilder {
            config,
            tools: ToolRegistry::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the frozen tool registry.
    #[must_use]
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Connects over WebSocket and serves until reconnecting gives up.
    ///
    /// # Errors
    ///
    /// Returns a fatal [`SessionError`] such as
    /// [`SessionError::ReconnectExhausted`].
    pub async fn process_events(&self) -> Result<(), SessionError> {
        self.process_events_until(core::future::pending()).await
    }

    /// Like [`process_events`](Self::process_events), but returns `Ok(())`
    /// as soon as `shutdown` resolves. In-flight invocations are abandoned.
    ///
    /// # Errors
    ///
    /// Returns a fatal [`SessionError`] if the loop stops on its own.
    pub async fn process_events_until<F>(&self, shutdown: F) -> Result<(), SessionError>
    where
        F: Future<Output = ()>,
    {
        let connector = WebSocketConnector::new(self.config.clone());
        self.process_events_with(&connector, shutdown).await
    }

    /// Runs the reconnect loop over any [`Connector`] until `shutdown`
    /// resolves or a fatal error occurs.
    ///
    /// # Errors
    ///
    /// Returns a fatal [`SessionError`] if the loop stops on its own.
    pub async fn process_events_with<C, F>(
        &self,
        connector: &C,
        shutdown: F,
    ) -> Result<(), SessionError>
    where
        C: Connector,
        F: Future<Output = ()>,
    {
        tokio::select! {
            err = self.run(connector) => Err(err),
            () = shutdown => {
                tracing::info!("shutdown requested, leaving event loop");
                Ok(())
            }
        }
    }

    async fn run<C: Connector>(&self, connector: &C) -> SessionError {
        let policy = self.config.reconnect_policy();
        let mut failures: u32 = 0;

        loop {
            match connector.connect().await {
                Ok(mut transport) => {
                    failures = 0;
                    tracing::info!(url = self.config.url(), "connected to orchestrator");
                    match self.serve(&mut transport).await {
                        Ok(()) => tracing::info!("orchestrator closed the connection"),
                        Err(err) => tracing::warn!(error = %err, "connection lost"),
                    }
                }
                Err(err) if err.is_fatal() => return err,
                Err(err) => {
                    tracing::warn!(url = self.config.url(), error = %err, "failed to connect to orchestrator");
                }
            }

            failures = failures.saturating_add(1);
            if !policy.allows(failures) {
                let attempts = failures - 1;
                tracing::error!(attempts, "giving up on orchestrator connection");
                return SessionError::ReconnectExhausted { attempts };
            }
            let delay = policy.backoff(failures);
            tracing::info!(attempt = failures, ?delay, "reconnecting");
            tokio::time::sleep(delay).await;
        }
    }

    /// Serves one connection: registers, then dispatches invocations until
    /// the peer closes.
    ///
    /// Each invocation runs as its own task; responses are written back by
    /// this loop as they complete, so ordering between invocations is not
    /// preserved. A tool that panics is answered with an error response.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails.
    pub async fn serve<T: Transport>(&self, transport: &mut T) -> Result<(), SessionError> {
        transport.send(self.registration().encode()?).await?;
        tracing::info!(tools = ?self.tools.names(), "registration sent");

        let (replies_tx, mut replies_rx) = mpsc::unbounded_channel();
        loop {
            tokio::select! {
                frame = transport.recv() => {
                    let Some(frame) = frame? else {
                        return Ok(());
                    };
                    self.handle_frame(&frame, &replies_tx);
                }
                Some(reply) = replies_rx.recv() => {
                    transport.send(reply.encode()?).await?;
                }
            }
        }
    }

    fn registration(&self) -> OutboundMessage {
        OutboundMessage::AgentRegister {
            agent_name: self.config.agent_name().map(str::to_string),
            tools: self.tools.definitions(),
        }
    }

    fn handle_frame(&self, frame: &str, replies: &mpsc::UnboundedSender<OutboundMessage>) {
        match InboundMessage::decode(frame) {
            Ok(InboundMessage::AgentInvoke {
                invocation_id,
                tool_name,
                arguments,
                metadata,
            }) => self.dispatch(invocation_id, tool_name, arguments, metadata, replies),
            Ok(InboundMessage::AgentRegistered { agent_id }) => {
                tracing::info!(%agent_id, "registered with orchestrator");
            }
            Ok(InboundMessage::AgentError { message }) => {
                tracing::warn!(%message, "orchestrator reported an error");
            }
            Err(err) => {
                let excerpt: String = frame.chars().take(MAX_LOGGED_FRAME_CHARS).collect();
                tracing::warn!(error = %err, frame = %excerpt, "skipping unreadable frame");
            }
        }
    }

    fn dispatch(
        &self,
        invocation_id: String,
        tool_name: String,
        arguments: Value,
        metadata: Map<String, Value>,
        replies: &mpsc::UnboundedSender<OutboundMessage>,
    ) {
        let tools = Arc::clone(&self.tools);
        let replies = replies.clone();
        let ctx = ToolContext::new(invocation_id.clone(), tool_name.clone()).with_metadata(metadata);
        tracing::debug!(parent: ctx.span(), "dispatching invocation");

        tokio::spawn(async move {
            let execution =
                AssertUnwindSafe(tools.execute(&tool_name, ctx, arguments)).catch_unwind();
            let response = match execution.await {
                Ok(Ok(value)) => value,
                Ok(Err(err)) => {
                    tracing::warn!(%invocation_id, tool = %tool_name, error = %err, "invocation failed");
                    json!({ "error": err.to_string() })
                }
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    tracing::error!(%invocation_id, tool = %tool_name, panic = %message, "tool panicked");
                    json!({ "error": format!("Tool '{tool_name}' panicked: {message}") })
                }
            };
            let reply = OutboundMessage::AgentResponse {
                invocation_id,
                tool_name,
                response,
            };
            if replies.send(reply).is_err() {
                tracing::debug!("connection closed before the response could be sent");
            }
        });
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
