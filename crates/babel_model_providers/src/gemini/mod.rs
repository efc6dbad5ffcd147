//! Gemini provider backend.
//!
//! Uses the `generateContent` endpoint of the Google Generative Language API.
//!
//! ```no_run
//! # use babel_model_providers::gemini::GeminiProvider;
//! # use babel_models::ModelRegistry;
//! # use std::sync::Arc;
//! # let mut registry = ModelRegistry::new();
//! registry.register_llm_provider("gemini", Arc::new(GeminiProvider::new("api-key")));
//! ```

mod client;
mod provider;
mod types;

pub use client::GeminiClient;
pub use provider::GeminiProvider;

/// Name the provider is conventionally registered under.
pub const PROVIDER_NAME: &str = "gemini";
