//! Gemini [`LlmProvider`] implementation.

use super::client::GeminiClient;
use super::types::{Content, GenerateContentRequest, GenerateContentResponse, Role};
use async_trait::async_trait;
use babel_models::llm::{
    AssistantBlock, GenerationError, GenerationRequest, GenerationResponse, LlmProvider, Message,
    Usage,
};

/// Gemini [`LlmProvider`] implementation.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: GeminiClient,
}

impl GeminiProvider {
    /// Creates a new provider against the public endpoint.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: GeminiClient::new(api_key),
        }
    }

    /// Creates a provider from a preconfigured client.
    #[must_use]
    pub fn from_client(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn generate(
        &self,
        model: &str,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let gemini_request = convert_request(&request)?;

        let response = self.client.generate_content(model, &gemini_request).await?;

        convert_response(response)
    }
}

fn convert_request(request: &GenerationRequest) -> Result<GenerateContentRequest, GenerationError> {
    if request.messages.is_empty() {
        return Err(GenerationError::InvalidRequest(
            "request must contain at least one message".to_string(),
        ));
    }

    let contents = request.messages.iter().map(convert_message).collect();

    Ok(GenerateContentRequest {
        contents,
        system_instruction: request
            .system
            .as_ref()
            .map(|system| Content::text(None, system.clone())),
    })
}

fn convert_message(message: &Message) -> Content {
    match message {
        Message::User { content } => Content::text(Some(Role::User), content.clone()),
    }
}

fn convert_response(response: GenerateContentResponse) -> Result<GenerationResponse, GenerationError> {
    let block_reason = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.clone());

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(match block_reason {
            Some(reason) => GenerationError::Refusal(format!("prompt blocked: {reason}")),
            None => GenerationError::InvalidResponse("response contained no candidates".to_string()),
        });
    };

    let content: Vec<AssistantBlock> = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| {
            let text = part.text?;
            Some(if part.thought == Some(true) {
                AssistantBlock::reasoning(text)
            } else {
                AssistantBlock::Text(text)
            })
        })
        .collect();

    if !content.iter().any(|block| matches!(block, AssistantBlock::Text(_))) {
        let reason = candidate
            .finish_reason
            .unwrap_or_else(|| "unknown".to_string());
        return Err(GenerationError::InvalidResponse(format!(
            "candidate contained no text (finish reason: {reason})"
        )));
    }

    let usage = response
        .usage_metadata
        .map(|usage| Usage {
            input_tokens: usage.prompt_token_count,
            output_tokens: usage.candidates_token_count,
            total_tokens: usage.total_token_count,
        })
        .unwrap_or_default();

    Ok(GenerationResponse { content, usage })
}
