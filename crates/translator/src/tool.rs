//! The `translate_text` tool.

use crate::outcome::TranslationOutcome;
use crate::prompt::build_prompt;
use babel_models::llm::{Llm, ToolDefinition};
use babel_tools::{FunctionCall, FunctionMetadata, InputParam, Tool, ToolContext, ToolFuture};
use serde_json::Value;

/// Name the tool is registered under.
pub const TOOL_NAME: &str = "translate_text";

/// Description announced to the orchestrator.
pub const TOOL_DESCRIPTION: &str = "Translate text from one language to another.";

/// Translates text between natural languages with an LLM.
///
/// The [`Llm`] handle is shared read-only by every invocation.
#[derive(Debug, Clone)]
pub struct TranslateTool {
    llm: Llm,
}

impl TranslateTool {
    /// Creates the tool around a model handle.
    #[must_use]
    pub fn new(llm: Llm) -> Self {
        Self { llm }
    }

    /// Returns the model handle.
    #[must_use]
    pub fn llm(&self) -> &Llm {
        &self.llm
    }

    /// Translates `text` and never fails: model errors become
    /// [`TranslationOutcome::Failure`].
    pub async fn translate(
        &self,
        ctx: &ToolContext,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> TranslationOutcome {
        tracing::info!(
            parent: ctx.span(),
            "Tool '{TOOL_NAME}' invoked. Translating '{text}' from {source_language} to {target_language}."
        );

        let prompt = build_prompt(text, source_language, target_language);

        match self.llm.generate_text(prompt).await {
            Ok(raw) => {
                let outcome = TranslationOutcome::success(&raw);
                if let Some(translated) = outcome.translated_text() {
                    tracing::info!(parent: ctx.span(), "Translation successful: '{translated}'");
                }
                outcome
            }
            Err(err) => {
                tracing::error!(
                    parent: ctx.span(),
                    model = self.llm.model_name(),
                    error = ?err,
                    "Translation failed: {err}"
                );
                TranslationOutcome::api_error(&err)
            }
        }
    }
}

impl Tool for TranslateTool {
    fn definition(&self) -> ToolDefinition {
        FunctionMetadata::new(TOOL_NAME)
            .with_description(TOOL_DESCRIPTION)
            .add_parameter(String::schema_info("text").with_description("The text to translate."))
            .add_parameter(
                String::schema_info("source_language")
                    .with_description("The source language of the text (e.g., 'English')."),
            )
            .add_parameter(
                String::schema_info("target_language")
                    .with_description("The language to translate the text into (e.g., 'Spanish')."),
            )
            .to_tool_definition()
    }

    fn execute(&self, ctx: ToolContext, args: Value) -> ToolFuture<'_> {
        Box::pin(async move {
            let call = FunctionCall::from_value(TOOL_NAME, args)?;
            let text: String = call.get_param("text")?;
            let source_language: String = call.get_param("source_language")?;
            let target_language: String = call.get_param("target_language")?;

            let outcome = self
                .translate(&ctx, &text, &source_language, &target_language)
                .await;
            Ok(serde_json::to_value(outcome)?)
        })
    }
}
