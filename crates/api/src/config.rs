//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

use agent_client::{AgentConfig, AgentError};
use axum::http::HeaderValue;
use database::Database;
use orchestrator::OrchestratorConfig;
use translator::TranslatorConfig;

/// Relay server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Maximum database connections.
    pub pool_size: u32,
    /// Reasoning agent settings.
    pub agent: AgentConfig,
    /// Translation service settings.
    pub translator: TranslatorConfig,
    /// Allowed CORS origin; any origin when unset.
    pub allowed_origin: Option<HeaderValue>,
    /// Pipeline tunables.
    pub orchestrator: OrchestratorConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `RELAY_ADDR` | Server bind address | `0.0.0.0:8000` |
    /// | `DATABASE_URL` | SQLite database URL | `sqlite:relay.db?mode=rwc` |
    /// | `DATABASE_POOL_SIZE` | Maximum database connections | `20` |
    /// | `AGENT_URL` | Agent chat endpoint | (required) |
    /// | `AGENT_TIMEOUT_SECS` | Agent request timeout | `120` |
    /// | `SPEECH_SVC_URL` | Translation service base URL | `http://localhost:8001` |
    /// | `WHATSAPP_ORIGIN` | Allowed CORS origin | any |
    /// | `RELAY_HISTORY_LIMIT` | Past turns in the agent prompt | `5` |
    /// | `RELAY_ASSISTANT_LABEL` | Assistant label in history | `AgriGPT` |
    /// | `RELAY_QUESTION_LABEL` | Label before the current question | `Farmer's current question` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("RELAY_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:relay.db?mode=rwc".to_string());

        let pool_size = match env::var("DATABASE_POOL_SIZE") {
            Ok(value) => value
                .parse()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::InvalidPoolSize(value))?,
            Err(_) => Database::DEFAULT_POOL_SIZE,
        };

        let allowed_origin = match env::var("WHATSAPP_ORIGIN") {
            Ok(origin) if !origin.trim().is_empty() => Some(
                HeaderValue::from_str(origin.trim())
                    .map_err(|_| ConfigError::InvalidOrigin(origin.clone()))?,
            ),
            _ => None,
        };

        Ok(Self {
            addr,
            database_url,
            pool_size,
            agent: AgentConfig::from_env()?,
            translator: TranslatorConfig::from_env(),
            allowed_origin,
            orchestrator: OrchestratorConfig::from_env(),
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid RELAY_ADDR format")]
    InvalidAddr,

    #[error("Invalid DATABASE_POOL_SIZE: {0}")]
    InvalidPoolSize(String),

    #[error("Invalid WHATSAPP_ORIGIN: {0}")]
    InvalidOrigin(String),

    #[error(transparent)]
    Agent(#[from] AgentError),
}
