//! Provider backends for the [`LlmProvider`](babel_models::llm::LlmProvider) seam.
//!
//! Each provider registers itself with the [`ModelRegistry`](babel_models::ModelRegistry)
//! under a short name, allowing standardized access through `"provider/model"` identifiers.
//!
//! # Supported Providers
//!
//! | Provider | Feature Flag | Description |
//! |----------|--------------|-------------|
//! | Gemini | `gemini` (default) | Google Generative Language API |
//!
//! # Usage
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use babel_model_providers::GeminiProvider;
//! use babel_models::ModelRegistry;
//! use std::sync::Arc;
//!
//! let mut registry = ModelRegistry::new();
//! registry.register_llm_provider("gemini", Arc::new(GeminiProvider::new("api-key")));
//! let llm = registry.llm("gemini/gemini-2.5-flash").expect("gemini is registered");
//! # }
//! ```

#[cfg(feature = "gemini")]
pub mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{GeminiClient, GeminiProvider};
