use core::fmt::Display;
use serde::{Deserialize, Serialize};

/// Result of one `translate_text` invocation.
///
/// Serializes to an object with exactly one key: `translated_text` on
/// success, `error` on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationOutcome {
    /// The model produced a translation.
    Success {
        /// Trimmed model output.
        translated_text: String,
    },
    /// The model call failed.
    Failure {
        /// Human-readable failure description.
        error: String,
    },
}

impl TranslationOutcome {
    /// Wraps model output, trimming surrounding whitespace.
    #[must_use]
    pub fn success(raw: &str) -> Self {
        Self::Success {
            translated_text: raw.trim().to_string(),
        }
    }

    /// Describes a failed model call.
    #[must_use]
    pub fn api_error(fault: impl Display) -> Self {
        Self::Failure {
            error: format!("Translation failed due to an API error: {fault}"),
        }
    }

    /// Returns `true` for [`Success`](Self::Success).
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the translation, if any.
    #[must_use]
    pub fn translated_text(&self) -> Option<&str> {
        match self {
            Self::Success { translated_text } => Some(translated_text),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure { error } => Some(error),
            Self::Success { .. } => None,
        }
    }
}
