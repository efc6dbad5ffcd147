//! Per-invocation context handed to tools.
//!
//! A [`ToolContext`] identifies one invocation and carries the `tracing`
//! span the runtime opened for it. Tools log through that span rather than
//! owning a sink of their own:
//!
//! ```
//! use babel_tools::ToolContext;
//!
//! let ctx = ToolContext::new("inv-1", "translate_text");
//! tracing::info!(parent: ctx.span(), "working");
//! ```

use serde_json::{Map, Value};
use tracing::Span;

/// Opaque handle describing a single tool invocation.
///
/// Cloning is cheap; clones share the same span.
#[derive(Debug, Clone)]
pub struct ToolContext {
    invocation_id: String,
    tool_name: String,
    metadata: Map<String, Value>,
    span: Span,
}

impl ToolContext {
    /// Creates a context for the given invocation and opens its span.
    #[must_use]
    pub fn new(invocation_id: impl Into<String>, tool_name: impl Into<String>) -> Self {
        let invocation_id = invocation_id.into();
        let tool_name = tool_name.into();
        let span = tracing::info_span!(
            "tool_invocation",
            invocation_id = %invocation_id,
            tool = %tool_name,
        );
        Self {
            invocation_id,
            tool_name,
            metadata: Map::new(),
            span,
        }
    }

    /// Creates a context with a freshly generated invocation id.
    ///
    /// Used when a tool is called directly rather than dispatched by a runtime.
    #[must_use]
    pub fn detached(tool_name: impl Into<String>) -> Self {
        Self::new(nanoid::nanoid!(), tool_name)
    }

    /// Attaches request metadata supplied by the orchestrator.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Returns the invocation id.
    #[must_use]
    pub fn invocation_id(&self) -> &str {
        &self.invocation_id
    }

    /// Returns the name of the invoked tool.
    #[must_use]
    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    /// Returns the request metadata.
    #[must_use]
    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    /// Returns the span all logging for this invocation belongs to.
    #[must_use]
    pub fn span(&self) -> &Span {
        &self.span
    }
}
