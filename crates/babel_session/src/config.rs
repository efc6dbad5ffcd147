//! Session configuration.

use crate::error::SessionError;
use core::time::Duration;
use tokio_tungstenite::tungstenite::http::Uri;

/// Where and how to reach the orchestrator.
#[derive(Clone)]
pub struct SessionConfig {
    url: String,
    jwt_token: Option<String>,
    agent_name: Option<String>,
    reconnect: ReconnectPolicy,
}

impl core::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("url", &self.url)
            .field("jwt_token", &self.jwt_token.as_ref().map(|_| "[REDACTED]"))
            .field("agent_name", &self.agent_name)
            .field("reconnect", &self.reconnect)
            .finish()
    }
}

impl SessionConfig {
    /// Creates a configuration for the given `ws://` or `wss://` URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            jwt_token: None,
            agent_name: None,
            reconnect: ReconnectPolicy::default(),
        }
    }

    /// Sets the bearer token presented on connect. An empty token is ignored.
    #[must_use]
    pub fn with_jwt_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.jwt_token = (!token.is_empty()).then_some(token);
        self
    }

    /// Sets the name announced in the registration frame.
    #[must_use]
    pub fn with_agent_name(mut self, name: impl Into<String>) -> Self {
        self.agent_name = Some(name.into());
        self
    }

    /// Sets the reconnect policy.
    #[must_use]
    pub fn with_reconnect_policy(mut self, policy: ReconnectPolicy) -> Self {
        self.reconnect = policy;
        self
    }

    /// Returns the orchestrator URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the bearer token, if any.
    #[must_use]
    pub fn jwt_token(&self) -> Option<&str> {
        self.jwt_token.as_deref()
    }

    /// Returns the announced agent name, if any.
    #[must_use]
    pub fn agent_name(&self) -> Option<&str> {
        self.agent_name.as_deref()
    }

    /// Returns the reconnect policy.
    #[must_use]
    pub fn reconnect_policy(&self) -> &ReconnectPolicy {
        &self.reconnect
    }

    /// Checks that the URL is an absolute `ws`/`wss` URL with a host.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidUrl`] otherwise.
    pub fn validate(&self) -> Result<(), SessionError> {
        let invalid = |reason: &str| SessionError::InvalidUrl {
            url: self.url.clone(),
            reason: reason.to_string(),
        };
        let uri: Uri = self.url.parse().map_err(|_| invalid("not a valid URL"))?;
        match uri.scheme_str() {
            Some("ws" | "wss") => {}
            _ => return Err(invalid("scheme must be ws or wss")),
        }
        if uri.host().is_none_or(str::is_empty) {
            return Err(invalid("missing host"));
        }
        Ok(())
    }
}

/// Exponential backoff between reconnect attempts.
///
/// The delay before attempt `n` (1-based) is `initial_backoff * 2^(n-1)`,
/// capped at `max_backoff`. The attempt counter resets after every
/// successful connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconnectPolicy {
    /// Delay before the first reconnect attempt.
    pub initial_backoff: Duration,
    /// Upper bound on the delay.
    pub max_backoff: Duration,
    /// Consecutive failed attempts allowed; `None` retries forever.
    pub max_attempts: Option<u32>,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
            max_attempts: None,
        }
    }
}

impl ReconnectPolicy {
    /// A policy that never reconnects.
    #[must_use]
    pub fn never() -> Self {
        Self {
            max_attempts: Some(0),
            ..Self::default()
        }
    }

    /// Returns the delay before the given 1-based attempt.
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.initial_backoff
            .saturating_mul(1 << exponent)
            .min(self.max_backoff)
    }

    /// Returns whether another attempt is allowed after `attempts` failures.
    #[must_use]
    pub fn allows(&self, attempts: u32) -> bool {
        self.max_attempts.is_none_or(|max| attempts <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_dropped() {
        let config = SessionConfig::new("ws://localhost:8080/ws").with_jwt_token("");
        assert_eq!(config.jwt_token(), None);
        let config = config.with_jwt_token("abc");
        assert_eq!(config.jwt_token(), Some("abc"));
    }

    #[test]
    fn debug_redacts_token() {
        let config = SessionConfig::new("ws://h/ws").with_jwt_token("super-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn validate_accepts_ws_and_wss() {
        SessionConfig::new("ws://localhost:8080/ws").validate().unwrap();
        SessionConfig::new("wss://orchestrator.example.com/agents")
            .validate()
            .unwrap();
    }

    #[test]
    fn validate_rejects_other_schemes_and_garbage() {
        let err = SessionConfig::new("http://localhost/ws").validate().unwrap_err();
        assert!(err.to_string().contains("scheme must be ws or wss"));
        assert!(SessionConfig::new("not a url").validate().is_err());
        assert!(SessionConfig::new("/relative/path").validate().is_err());
    }

    #[test]
    fn backoff_doubles_and_caps() {
        let policy = ReconnectPolicy {
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_millis(500),
            max_attempts: None,
        };
        assert_eq!(policy.backoff(1), Duration::from_millis(100));
        assert_eq!(policy.backoff(2), Duration::from_millis(200));
        assert_eq!(policy.backoff(3), Duration::from_millis(400));
        assert_eq!(policy.backoff(4), Duration::from_millis(500));
        assert_eq!(policy.backoff(100), Duration::from_millis(500));
    }

    #[test]
    fn attempt_limits() {
        assert!(ReconnectPolicy::default().allows(u32::MAX));
        let never = ReconnectPolicy::never();
        assert!(!never.allows(1));
        let three = ReconnectPolicy {
            max_attempts: Some(3),
            ..ReconnectPolicy::default()
        };
        assert!(three.allows(3));
        assert!(!three.allows(4));
    }
}
