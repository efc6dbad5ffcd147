//! The core [`Tool`] trait for executable tools.

use crate::context::ToolContext;
use crate::error::ToolError;
use babel_models::llm::ToolDefinition;
use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by [`Tool::execute`].
pub type ToolFuture<'a> =
    Pin<Box<dyn Future<Output = Result<serde_json::Value, ToolError>> + Send + 'a>>;

/// A tool that can be invoked by an orchestrator.
///
/// Tools expose a [`ToolDefinition`] (name, description, JSON schema) and an
/// async [`execute`](Tool::execute) method that runs with the tool's captured
/// environment and the per-invocation [`ToolContext`].
pub trait Tool: Send + Sync + 'static {
    /// Returns the orchestrator-facing tool definition with JSON schema.
    fn definition(&self) -> ToolDefinition;

    /// Executes the tool with JSON arguments.
    fn execute(&self, ctx: ToolContext, args: serde_json::Value) -> ToolFuture<'_>;
}
