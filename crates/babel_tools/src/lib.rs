//! Tool framework for Babel agents.
//!
//! This crate provides the infrastructure for defining, registering, and
//! executing tools that an orchestrator can call. Tools are explicit
//! [`Tool`] implementations registered by name in a [`ToolRegistry`] at
//! startup; nothing is discovered implicitly.
//!
//! # Quick Start
//!
//! ```ignore
//! use babel_tools::{FunctionCall, FunctionMetadata, InputParam, Tool, ToolContext, ToolRegistry};
//!
//! struct Echo;
//!
//! impl Tool for Echo {
//!     fn definition(&self) -> ToolDefinition {
//!         FunctionMetadata::new("echo")
//!             .with_description("Echo the input back.")
//!             .add_parameter(String::schema_info("input").with_description("Text to echo."))
//!             .to_tool_definition()
//!     }
//!
//!     fn execute(&self, _ctx: ToolContext, args: Value) -> ToolFuture<'_> {
//!         Box::pin(async move {
//!             let call = FunctionCall::from_value("echo", args)?;
//!             Ok(call.get_param::<String>("input")?.into())
//!         })
//!     }
//! }
//!
//! let mut registry = ToolRegistry::new();
//! registry.register(Echo);
//! ```
//!
//! # Architecture
//!
//! - [`Tool`]: trait for executable tools with JSON schema
//! - [`ToolRegistry`]: stores and dispatches tools
//! - [`ToolContext`]: per-invocation handle (ids, metadata, tracing span)
//! - [`FunctionCall`] / [`InputParam`]: parameter extraction
//! - [`FunctionMetadata`] / [`ParameterInfo`]: schema building

pub mod context;
pub mod error;
pub mod param;
pub mod registry;
pub mod schema;
pub mod tool;

// Re-export core types at crate root.
pub use context::ToolContext;
pub use error::ToolError;
pub use param::{FunctionCall, InputParam};
pub use registry::ToolRegistry;
pub use schema::{FunctionMetadata, ParameterInfo};
pub use tool::{Tool, ToolFuture};
