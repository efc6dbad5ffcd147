//! The [`LlmProvider`] trait for LLM model providers.

use super::error::GenerationError;
use super::types::{GenerationRequest, GenerationResponse};
use async_trait::async_trait;

/// Trait implemented by LLM providers for text generation.
///
/// Implementations must be safe to share between concurrent requests:
/// a provider holds only immutable credentials and configuration and
/// issues an independent request per call.
#[async_trait]
pub trait LlmProvider: Send + Sync + 'static {
    /// Sends a generation request to the provider.
    ///
    /// # Arguments
    ///
    /// * `model` - The model name on which to perform generation
    /// * `request` - The generation request
    async fn generate(
        &self,
        model: &str,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError>;
}
