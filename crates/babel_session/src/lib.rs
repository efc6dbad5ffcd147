//! Orchestrator session runtime for Babel agents.
//!
//! A [`Session`] owns a frozen [`ToolRegistry`](babel_tools::ToolRegistry)
//! and serves it to an orchestrator over a persistent connection:
//!
//! 1. connect (WebSocket, bearer token on the upgrade request)
//! 2. send `agent_register` with every tool definition
//! 3. run each `agent_invoke` as its own task and answer with
//!    `agent_response`, matched by invocation id
//! 4. on disconnect, reconnect with exponential backoff
//!
//! # Example
//!
//! ```no_run
//! use babel_session::{Session, SessionConfig};
//! use babel_tools::ToolRegistry;
//!
//! # async fn run() -> Result<(), babel_session::SessionError> {
//! let registry = ToolRegistry::new();
//! let config = SessionConfig::new("ws://localhost:8080/ws").with_jwt_token("secret");
//! let session = Session::builder(config).with_tools(registry).build()?;
//!
//! session
//!     .process_events_until(async {
//!         let _ = tokio::signal::ctrl_c().await;
//!     })
//!     .await
//! # }
//! ```
//!
//! # Modules
//!
//! - [`config`]: endpoint, credentials and reconnect policy
//! - [`protocol`]: JSON frames exchanged with the orchestrator
//! - [`transport`]: the [`Transport`] seam and its WebSocket implementation
//! - [`session`]: registration, dispatch and the reconnect loop

pub mod config;
pub mod error;
pub mod protocol;
pub mod session;
pub mod transport;

pub use config::{ReconnectPolicy, SessionConfig};
pub use error::SessionError;
pub use protocol::{InboundMessage, OutboundMessage};
pub use session::{Session, SessionBuilder};
pub use transport::{Connector, Transport, WebSocketConnector, WebSocketTransport};

#[cfg(any(test, feature = "test-utils"))]
pub use transport::channel::{ChannelConnector, ChannelPeer, ChannelTransport};
