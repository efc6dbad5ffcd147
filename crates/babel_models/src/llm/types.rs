//! Core types for LLM generation requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─────────────────────
// Request / Response
// ─────────────────────

/// A generation request to a model.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// System prompt for the model.
    pub system: Option<String>,
    /// The messages to send to the model.
    pub messages: Vec<Message>,
}

impl GenerationRequest {
    /// Creates a new generation request with a user message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use babel_models::llm::GenerationRequest;
    ///
    /// let request = GenerationRequest::new("Translate 'hello' to French.");
    /// assert_eq!(request.messages.len(), 1);
    /// ```
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            system: None,
            messages: vec![Message::user(message)],
        }
    }

    /// Creates a new generation request with a system prompt and user message.
    #[must_use]
    pub fn with_system(system: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(message).system(system)
    }

    /// Sets the system prompt for the model.
    #[must_use]
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// A generation response from a model.
#[derive(Debug, Clone)]
pub struct GenerationResponse {
    /// The generated content blocks.
    pub content: Vec<AssistantBlock>,
    /// Token usage information.
    pub usage: Usage,
}

impl GenerationResponse {
    /// Returns all text content blocks concatenated into a single string.
    ///
    /// Reasoning blocks are skipped. Returns an empty string if no text
    /// content is found.
    #[must_use]
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                AssistantBlock::Text(text) => Some(text.as_str()),
                AssistantBlock::Reasoning(_) => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }

    /// Returns whether the response carries at least one text block.
    #[must_use]
    pub fn has_text(&self) -> bool {
        self.content
            .iter()
            .any(|block| matches!(block, AssistantBlock::Text(_)))
    }
}

/// Token usage information.
#[derive(Debug, Clone, Default)]
pub struct Usage {
    /// Number of tokens in the input.
    pub input_tokens: Option<u64>,
    /// Number of tokens in the output.
    pub output_tokens: Option<u64>,
    /// Total tokens (input + output).
    pub total_tokens: Option<u64>,
}

// ─────────────────────
// Messages
// ─────────────────────

/// An input message sent to the model.
#[derive(Debug, Clone)]
pub enum Message {
    /// A message from the user.
    User {
        /// The text of the user message.
        content: String,
    },
}

impl Message {
    /// Creates a user message with text content.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::User {
            content: text.into(),
        }
    }
}

// ─────────────────────
// Content Blocks
// ─────────────────────

/// Content that can appear in a model response.
#[derive(Debug, Clone)]
pub enum AssistantBlock {
    /// Plain text content.
    Text(String),
    /// Reasoning/thinking content from the model.
    Reasoning(ReasoningBlock),
}

impl AssistantBlock {
    /// Creates a text content block.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a reasoning content block.
    #[must_use]
    pub fn reasoning(reasoning: impl Into<String>) -> Self {
        Self::Reasoning(ReasoningBlock {
            reasoning: vec![reasoning.into()],
            signature: None,
        })
    }
}

/// Reasoning/thinking content from thinking-capable models.
#[derive(Debug, Clone)]
pub struct ReasoningBlock {
    /// The reasoning steps or thoughts.
    pub reasoning: Vec<String>,
    /// Signature for verification (required by some providers).
    pub signature: Option<String>,
}

// ─────────────────────
// Tool Descriptions
// ─────────────────────

/// Description of a callable tool, as advertised to an orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Name of the tool (e.g., `translate_text`).
    pub name: String,
    /// Human-readable description of what the tool does.
    pub description: String,
    /// JSON Schema defining the tool's parameters.
    ///
    /// This is an object schema with one property per parameter:
    /// ```json
    /// {
    ///   "type": "object",
    ///   "properties": {
    ///     "text": {"type": "string", "description": "The text to translate."}
    ///   },
    ///   "required": ["text"]
    /// }
    /// ```
    pub parameters: Value,
}
