//! Model provider registry.

use crate::error::CreateModelError;
use crate::llm::{Llm, LlmProvider};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry for model provider implementations.
///
/// Providers are registered once at startup; consumers then resolve
/// `"provider/model"` identifiers (e.g. `"gemini/gemini-2.5-flash"`) into
/// [`Llm`] handles. See [`llm()`](Self::llm).
#[derive(Default)]
pub struct ModelRegistry {
    // Maps provider names to implementations.
    llm_providers: HashMap<String, Arc<dyn LlmProvider>>,
}

impl core::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("llm_providers", &self.llm_provider_names())
            .finish()
    }
}

impl ModelRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            llm_providers: HashMap::new(),
        }
    }

    /// Creates a handle to an [`Llm`].
    ///
    /// # Arguments
    ///
    /// * `model_id` - Identifier in `"provider/model"` format (e.g., `"gemini/gemini-2.5-flash"`)
    ///
    /// # Errors
    ///
    /// Returns an error if the `model_id` structure is invalid or the provider is not registered.
    pub fn llm(&self, model_id: impl AsRef<str>) -> Result<Llm, CreateModelError> {
        let model_id = model_id.as_ref();

        let (provider_name, model_name) = model_id
            .split_once('/')
            .filter(|(provider, model)| !provider.is_empty() && !model.is_empty())
            .ok_or_else(|| CreateModelError::InvalidModelId(model_id.to_string()))?;

        let provider = self
            .get_llm_provider(provider_name)
            .ok_or_else(|| CreateModelError::UnknownProvider(provider_name.to_string()))?;

        Ok(Llm::new(provider, model_name))
    }

    /// Registers an LLM provider.
    ///
    /// # Arguments
    ///
    /// * `name` - Provider name used in identifiers (e.g., `"gemini"` for `"gemini/gemini-2.5-flash"`)
    /// * `provider` - The provider implementation
    ///
    /// # Panics
    ///
    /// Panics if a provider with the same name is already registered.
    pub fn register_llm_provider<P: LlmProvider>(
        &mut self,
        name: impl Into<String>,
        provider: Arc<P>,
    ) {
        let name = name.into();
        assert!(
            !self.llm_providers.contains_key(&name),
            "LLM provider '{name}' is already registered"
        );
        self.llm_providers
            .insert(name, provider as Arc<dyn LlmProvider>);
    }

    /// Returns a provider by name.
    #[must_use]
    pub fn get_llm_provider(&self, name: impl AsRef<str>) -> Option<Arc<dyn LlmProvider>> {
        self.llm_providers.get(name.as_ref()).cloned()
    }

    /// Checks if a provider is registered.
    #[must_use]
    pub fn has_llm_provider(&self, name: impl AsRef<str>) -> bool {
        self.llm_providers.contains_key(name.as_ref())
    }

    /// Lists registered provider names.
    #[must_use]
    pub fn llm_provider_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.llm_providers.keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{GenerationError, GenerationRequest, GenerationResponse};
    use async_trait::async_trait;

    struct NullProvider;

    #[async_trait]
    impl LlmProvider for NullProvider {
        async fn generate(
            &self,
            _model: &str,
            _request: GenerationRequest,
        ) -> Result<GenerationResponse, GenerationError> {
            Err(GenerationError::Http("unreachable".to_string()))
        }
    }

    fn registry() -> ModelRegistry {
        let mut registry = ModelRegistry::new();
        registry.register_llm_provider("gemini", Arc::new(NullProvider));
        registry
    }

    #[test]
    fn resolves_provider_and_model() {
        let llm = registry().llm("gemini/gemini-2.5-flash").unwrap();
        assert_eq!(llm.model_name(), "gemini-2.5-flash");
    }

    #[test]
    fn rejects_missing_separator() {
        let err = registry().llm("gemini-2.5-flash").unwrap_err();
        assert!(matches!(err, CreateModelError::InvalidModelId(_)));
    }

    #[test]
    fn rejects_empty_model_name() {
        let err = registry().llm("gemini/").unwrap_err();
        assert!(matches!(err, CreateModelError::InvalidModelId(_)));
    }

    #[test]
    fn rejects_unknown_provider() {
        let err = registry().llm("openai/gpt-4o").unwrap_err();
        assert!(matches!(err, CreateModelError::UnknownProvider(name) if name == "openai"));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn duplicate_provider_panics() {
        let mut registry = registry();
        registry.register_llm_provider("gemini", Arc::new(NullProvider));
    }

    #[test]
    fn lists_provider_names() {
        let registry = registry();
        assert!(registry.has_llm_provider("gemini"));
        assert_eq!(registry.llm_provider_names(), vec!["gemini".to_string()]);
    }
}
