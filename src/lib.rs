//! Tool-serving agents for orchestrators.
//!
//! Re-exports the Babel crates for convenience.

/// Logging setup.
pub use babel_core;

/// Model provider seam and registry.
pub use babel_models;

/// Concrete model providers.
pub use babel_model_providers;

/// Tool trait, registry and argument helpers.
pub use babel_tools;

/// Orchestrator session runtime.
pub use babel_session;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use babel_core::{TracingConfig, TracingFormat};
    #[cfg(feature = "gemini")]
    pub use babel_model_providers::{GeminiClient, GeminiProvider};
    pub use babel_models::ModelRegistry;
    pub use babel_models::llm::{GenerationError, Llm, LlmProvider, ToolDefinition};
    pub use babel_session::{ReconnectPolicy, Session, SessionConfig, SessionError};
    pub use babel_tools::{
        FunctionCall, FunctionMetadata, InputParam, Tool, ToolContext, ToolError, ToolFuture,
        ToolRegistry,
    };
}
