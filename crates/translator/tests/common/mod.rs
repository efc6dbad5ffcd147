//! Stub model providers shared by the translator tests.

#![allow(dead_code, reason = "each test binary uses a different subset of helpers")]

use async_trait::async_trait;
use babel_models::llm::{
    AssistantBlock, GenerationError, GenerationRequest, GenerationResponse, Llm, LlmProvider,
    Message, Usage,
};
use core::time::Duration;
use std::sync::{Arc, Mutex};

/// What a [`StubProvider`] does when called.
#[derive(Clone)]
pub enum Reply {
    /// Answer with this text.
    Text(String),
    /// Answer with a text that depends on the prompt.
    Echo(fn(&str) -> String),
    /// Fail with this error.
    Fail(fn() -> GenerationError),
}

/// A provider that records prompts and answers with a canned [`Reply`].
pub struct StubProvider {
    reply: Reply,
    delay: Duration,
    prompts: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn new(reply: Reply) -> Arc<Self> {
        Self::delayed(reply, Duration::ZERO)
    }

    pub fn delayed(reply: Reply, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            reply,
            delay,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn text(text: &str) -> Arc<Self> {
        Self::new(Reply::Text(text.to_string()))
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    async fn generate(
        &self,
        _model: &str,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let prompt = request
            .messages
            .iter()
            .map(|message| match message {
                Message::User { content } => content.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n");
        self.prompts.lock().unwrap().push(prompt.clone());

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let text = match &self.reply {
            Reply::Text(text) => text.clone(),
            Reply::Echo(f) => f(&prompt),
            Reply::Fail(make_error) => return Err(make_error()),
        };
        Ok(GenerationResponse {
            content: vec![AssistantBlock::text(text)],
            usage: Usage::default(),
        })
    }
}

/// Wraps a provider in an [`Llm`] handle.
pub fn llm(provider: Arc<StubProvider>) -> Llm {
    Llm::new(provider, "gemini-2.5-flash")
}

/// Simulated network timeout.
pub fn timeout_error() -> GenerationError {
    GenerationError::Http("request timed out: operation timed out".to_string())
}
