//! LLM (Large Language Model) generation capabilities.
//!
//! This module provides the core trait and types for text generation:
//! the [`LlmProvider`] seam implemented by provider backends, and the
//! [`Llm`] handle consumers hold on to.

mod error;
mod model;
mod provider;
mod types;

pub use error::GenerationError;
pub use model::Llm;
pub use provider::LlmProvider;
pub use types::{
    AssistantBlock, GenerationRequest, GenerationResponse, Message, ReasoningBlock,
    ToolDefinition, Usage,
};
