//! Model provider interface and registry for Babel.
//!
//! Provides a unified interface for AI model access, decoupling consumers from
//! provider implementations.
//!
//! # Overview
//!
//! - Provider-agnostic: consumers depend only on this crate, not on a
//!   specific provider backend.
//! - Providers are registered at startup in a [`ModelRegistry`], so the model
//!   can be swapped via configuration without code changes.
//!
//! # Example
//!
//! ```ignore
//! use babel_models::ModelRegistry;
//!
//! let mut registry = ModelRegistry::new();
//! registry.register_llm_provider("gemini", Arc::new(GeminiProvider::new(api_key)));
//!
//! let llm = registry.llm("gemini/gemini-2.5-flash")?;
//! let text = llm.generate_text("Say hello in French.").await?;
//! ```

pub mod error;
pub mod llm;
mod registry;

pub use error::CreateModelError;
pub use registry::ModelRegistry;
