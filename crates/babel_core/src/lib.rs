//! Core infrastructure shared by Babel agents.
//!
//! - [`logging`] configures the process-wide `tracing` subscriber.

pub mod logging;

pub use logging::{ParseTracingFormatError, TracingConfig, TracingFormat};
