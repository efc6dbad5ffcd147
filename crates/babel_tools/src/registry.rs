//! Tool registry.
//!
//! The [`ToolRegistry`] stores registered tools and provides lookup/execution.
//! It is filled explicitly at startup and then frozen behind an `Arc` by the
//! runtime that serves it, so it is mutable only while the agent is being
//! assembled.
//!
//! # Usage
//!
//! ```ignore
//! use babel_tools::ToolRegistry;
//!
//! let mut registry = ToolRegistry::new();
//! registry.register(TranslateTool::new(llm));
//!
//! let session = Session::builder(config).with_tools(registry).build();
//! ```

use crate::context::ToolContext;
use crate::error::ToolError;
use crate::tool::{Tool, ToolFuture};
use babel_models::llm::ToolDefinition;
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::Instrument;

/// Registry of available tools.
///
/// Stores tools by name, in registration order, and provides lookup,
/// execution, and definition listing.
#[derive(Default)]
pub struct ToolRegistry {
    tools: IndexMap<String, Arc<dyn Tool>>,
}

impl core::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

impl ToolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: IndexMap::new(),
        }
    }

    /// Registers a tool.
    ///
    /// # Panics
    ///
    /// Panics if a tool with the same name is already registered.
    pub fn register(&mut self, tool: impl Tool) {
        let name = tool.definition().name;
        assert!(
            !self.tools.contains_key(&name),
            "Tool '{name}' is already registered"
        );
        self.tools.insert(name, Arc::new(tool));
    }

    /// Executes a tool by name with JSON arguments.
    ///
    /// The tool runs inside the context's span.
    pub fn execute<'a>(
        &'a self,
        name: &'a str,
        ctx: ToolContext,
        args: serde_json::Value,
    ) -> ToolFuture<'a> {
        let tool = self.tools.get(name).cloned();
        let span = ctx.span().clone();
        Box::pin(
            async move {
                let tool = tool.ok_or_else(|| ToolError::unknown_tool(name))?;
                tool.execute(ctx, args).await
            }
            .instrument(span),
        )
    }

    /// Returns tool definitions for all registered tools.
    #[must_use]
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|tool| tool.definition()).collect()
    }

    /// Returns whether a tool with the given name is registered.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Returns the names of all registered tools.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Returns the number of registered tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns whether no tools are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
