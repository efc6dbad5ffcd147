//! LLM handle for generation requests.

use super::error::GenerationError;
use super::provider::LlmProvider;
use super::types::{GenerationRequest, GenerationResponse};
use std::sync::Arc;

/// An LLM handle for making generation requests.
///
/// Binds a shared [`LlmProvider`] to a model name. Cloning is cheap and
/// every clone talks to the same provider instance.
///
/// Usually created via [`ModelRegistry::llm()`](crate::ModelRegistry::llm);
/// tests construct one directly around a stub provider.
#[derive(Clone)]
pub struct Llm {
    provider: Arc<dyn LlmProvider>,
    model: String,
}

impl core::fmt::Debug for Llm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Llm").field("model", &self.model).finish()
    }
}

impl Llm {
    /// Creates a new LLM handle from provider and model name.
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Sends a generation request to the model.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] if the request fails.
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        self.provider.generate(&self.model, request).await
    }

    /// Sends a single user prompt and returns the generated text.
    ///
    /// The text is returned as produced by the model, untrimmed.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] if the request fails, or
    /// [`GenerationError::InvalidResponse`] if the response carries no
    /// text content at all.
    pub async fn generate_text(&self, prompt: impl Into<String>) -> Result<String, GenerationError> {
        let response = self.generate(GenerationRequest::new(prompt)).await?;
        if !response.has_text() {
            return Err(GenerationError::InvalidResponse(
                "response contained no text content".to_string(),
            ));
        }
        Ok(response.text())
    }

    /// Returns the model name (without provider prefix).
    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model
    }
}
