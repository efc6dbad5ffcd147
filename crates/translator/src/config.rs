//! Process configuration.
//!
//! Flags fall back to environment variables (and `.env`, loaded by the
//! binary before parsing):
//!
//! | Flag | Variable | Default |
//! |------|----------|---------|
//! | `--api-key` | `GOOGLE_API_KEY` | required |
//! | `--ws-url` | `ORCHESTRATOR_WS_URL` | `ws://localhost:8080/ws` |
//! | `--jwt-token` | `ORCHESTRATOR_JWT` | empty (no header) |
//! | `--model` | `TRANSLATOR_MODEL` | `gemini/gemini-2.5-flash` |
//! | `--agent-name` | `AGENT_NAME` | none |
//! | `--request-timeout-secs` | `GEMINI_TIMEOUT_SECS` | none |
//! | `--gemini-base-url` | `GEMINI_BASE_URL` | public endpoint |
//! | `--max-reconnect-attempts` | `RECONNECT_MAX_ATTEMPTS` | unlimited |
//! | `--log-filter` | `RUST_LOG` | none |
//! | `--log-format` | | `pretty` |

use babel_core::{TracingConfig, TracingFormat};
use babel_session::{ReconnectPolicy, SessionConfig, SessionError};
use clap::Parser;
use core::time::Duration;
use tracing::Level;

/// Default orchestrator endpoint.
pub const DEFAULT_WS_URL: &str = "ws://localhost:8080/ws";

/// Default `provider/model` identifier.
pub const DEFAULT_MODEL: &str = "gemini/gemini-2.5-flash";

/// Command-line interface of `babel-translator`.
#[derive(Debug, Parser)]
#[command(
    name = "babel-translator",
    version,
    about = "Serve the translate_text tool to an agent orchestrator"
)]
pub struct Cli {
    /// Google Generative Language API key.
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Orchestrator WebSocket URL.
    #[arg(long, env = "ORCHESTRATOR_WS_URL", default_value = DEFAULT_WS_URL)]
    pub ws_url: String,

    /// Bearer token presented to the orchestrator.
    #[arg(long, env = "ORCHESTRATOR_JWT", default_value = "", hide_env_values = true)]
    pub jwt_token: String,

    /// Model identifier in `provider/model` form.
    #[arg(long, env = "TRANSLATOR_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Name announced when registering.
    #[arg(long, env = "AGENT_NAME")]
    pub agent_name: Option<String>,

    /// Per-request timeout for model calls, in seconds.
    #[arg(long, env = "GEMINI_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Override for the Gemini API base URL.
    #[arg(long, env = "GEMINI_BASE_URL")]
    pub gemini_base_url: Option<String>,

    /// Give up after this many consecutive failed reconnects.
    #[arg(long, env = "RECONNECT_MAX_ATTEMPTS")]
    pub max_reconnect_attempts: Option<u32>,

    /// Tracing filter directives, e.g. `translator=debug,info`.
    #[arg(long, env = "RUST_LOG")]
    pub log_filter: Option<String>,

    /// Log output format: pretty, compact or json.
    #[arg(long, default_value_t = TracingFormat::Pretty)]
    pub log_format: TracingFormat,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Logging settings. Usable before the rest of the configuration is
    /// validated, so validation failures can be logged.
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        let level = if self.verbose { Level::DEBUG } else { Level::INFO };
        let config = TracingConfig::new()
            .with_level(level)
            .with_format(self.log_format);
        match self.log_filter.as_deref().filter(|filter| !filter.trim().is_empty()) {
            Some(filter) => config.with_env_filter(filter),
            None => config,
        }
    }
}

/// Errors found while validating the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No API key was supplied.
    #[error("GOOGLE_API_KEY not found: set it in the environment or a .env file")]
    MissingApiKey,

    /// A zero timeout was requested.
    #[error("request timeout must be at least one second")]
    InvalidTimeout,

    /// The orchestrator endpoint is unusable.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Validated configuration of the translator agent.
#[derive(Clone)]
pub struct TranslatorConfig {
    api_key: String,
    model_id: String,
    request_timeout: Option<Duration>,
    gemini_base_url: Option<String>,
    session: SessionConfig,
}

impl core::fmt::Debug for TranslatorConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TranslatorConfig")
            .field("api_key", &"[REDACTED]")
            .field("model_id", &self.model_id)
            .field("request_timeout", &self.request_timeout)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("session", &self.session)
            .finish()
    }
}

impl TranslatorConfig {
    /// Returns the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the `provider/model` identifier.
    #[must_use]
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Returns the model request timeout, if any.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Returns the Gemini base URL override, if any.
    #[must_use]
    pub fn gemini_base_url(&self) -> Option<&str> {
        self.gemini_base_url.as_deref()
    }

    /// Returns the orchestrator session settings.
    #[must_use]
    pub fn session(&self) -> &SessionConfig {
        &self.session
    }
}

impl TryFrom<Cli> for TranslatorConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let api_key = cli
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let request_timeout = match cli.request_timeout_secs {
            Some(0) => return Err(ConfigError::InvalidTimeout),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        let mut session = SessionConfig::new(cli.ws_url).with_jwt_token(cli.jwt_token);
        if let Some(name) = cli.agent_name {
            session = session.with_agent_name(name);
        }
        if let Some(max) = cli.max_reconnect_attempts {
            session = session.with_reconnect_policy(ReconnectPolicy {
                max_attempts: Some(max),
                ..ReconnectPolicy::default()
            });
        }
        session.validate()?;

        Ok(Self {
            api_key,
            model_id: cli.model,
            request_timeout,
            gemini_base_url: cli.gemini_base_url,
            session,
        })
    }
}
