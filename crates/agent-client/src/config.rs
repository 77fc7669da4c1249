//! Configuration for the agent client.

use std::env;
use std::time::Duration;

use crate::error::AgentError;

/// Upper bound for a single agent call.
pub const DEFAULT_AGENT_TIMEOUT: Duration = Duration::from_secs(120);

/// Timeout for the health probe against the agent's docs page.
pub(crate) const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for [`crate::AgentClient`].
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Full URL of the agent chat endpoint (e.g., "https://agent.example/chat").
    pub url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl AgentConfig {
    /// Create a configuration for the given endpoint with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_AGENT_TIMEOUT,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `AGENT_URL` - Agent chat endpoint
    ///
    /// Optional environment variables:
    /// - `AGENT_TIMEOUT_SECS` - Request timeout in seconds (default: 120)
    pub fn from_env() -> Result<Self, AgentError> {
        let url = env::var("AGENT_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AgentError::Configuration("AGENT_URL not set".to_string()))?;

        let timeout = env::var("AGENT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_AGENT_TIMEOUT);

        Ok(Self { url, timeout })
    }

    /// URL probed by health checks: the chat URL without `/chat`, plus `/docs`.
    pub fn health_url(&self) -> String {
        format!("{}/docs", self.url.replace("/chat", ""))
    }
}
