//! `babel-translator`: serves `translate_text` to an agent orchestrator.
//!
//! # Usage
//!
//! ```bash
//! GOOGLE_API_KEY=... babel-translator --ws-url ws://localhost:8080/ws --jwt-token <token>
//! ```
//!
//! Stop with Ctrl-C.

use anyhow::Context;
use babel_model_providers::gemini::{self, GeminiClient, GeminiProvider};
use babel_models::ModelRegistry;
use babel_session::Session;
use babel_tools::ToolRegistry;
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use translator::{Cli, TranslateTool, TranslatorConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    cli.tracing_config().init();

    match run(cli).await {
        Ok(()) => {
            tracing::info!("agent stopped");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let error = format!("{err:#}");
            tracing::error!(%error, "agent failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = TranslatorConfig::try_from(cli).context("invalid configuration")?;

    let mut client = GeminiClient::new(config.api_key());
    if let Some(timeout) = config.request_timeout() {
        client = client.with_timeout(timeout);
    }
    if let Some(base_url) = config.gemini_base_url() {
        client = client.with_base_url(base_url);
    }

    let mut models = ModelRegistry::new();
    models.register_llm_provider(
        gemini::PROVIDER_NAME,
        Arc::new(GeminiProvider::from_client(client)),
    );
    let llm = models
        .llm(config.model_id())
        .with_context(|| format!("cannot use model '{}'", config.model_id()))?;

    let mut tools = ToolRegistry::new();
    tools.register(TranslateTool::new(llm));

    let session = Session::builder(config.session().clone())
        .with_tools(tools)
        .build()
        .context("cannot build orchestrator session")?;

    tracing::info!(
        model = config.model_id(),
        url = config.session().url(),
        "Gemini translator agent is running; waiting for the orchestrator to assign translation tasks"
    );

    session
        .process_events_until(shutdown_signal())
        .await
        .context("orchestrator session ended")?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received Ctrl-C, shutting down"),
        Err(err) => {
            tracing::error!(error = %err, "cannot listen for Ctrl-C; running until the session ends");
            core::future::pending::<()>().await;
        }
    }
}
