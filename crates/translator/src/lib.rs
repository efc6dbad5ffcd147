//! Babel translation agent.
//!
//! Serves a single tool, `translate_text`, that asks an LLM to translate
//! text between two natural languages and answers with either
//! `{"translated_text": ...}` or `{"error": ...}`.
//!
//! | Item | Role |
//! |------|------|
//! | [`TranslateTool`] | the `translate_text` [`Tool`](babel_tools::Tool) |
//! | [`TranslationOutcome`] | the two result shapes |
//! | [`build_prompt`] | instruction prompt sent to the model |
//! | [`TranslatorConfig`] | validated process configuration |

pub mod config;
mod outcome;
mod prompt;
mod tool;

pub use config::{Cli, ConfigError, TranslatorConfig};
pub use outcome::TranslationOutcome;
pub use prompt::build_prompt;
pub use tool::{TOOL_DESCRIPTION, TOOL_NAME, TranslateTool};
