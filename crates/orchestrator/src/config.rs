//! Orchestrator configuration.

use std::env;
use std::time::Duration;

/// Tunables for the request pipeline.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Number of past turns included in the agent prompt.
    pub history_limit: usize,
    /// Timeout for translating the inbound message to English.
    pub inbound_translation_timeout: Duration,
    /// Timeout for translating the agent reply back.
    pub reply_translation_timeout: Duration,
    /// Label for assistant turns in the history block.
    pub assistant_label: String,
    /// Label placed before the current question when history is present.
    pub question_label: String,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            history_limit: 5,
            inbound_translation_timeout: Duration::from_secs(20),
            reply_translation_timeout: Duration::from_secs(30),
            assistant_label: "AgriGPT".to_string(),
            question_label: "Farmer's current question".to_string(),
        }
    }
}

impl OrchestratorConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `RELAY_HISTORY_LIMIT` - Past turns in the prompt (default: 5)
    /// - `RELAY_ASSISTANT_LABEL` - Assistant label (default: AgriGPT)
    /// - `RELAY_QUESTION_LABEL` - Question label (default: Farmer's current question)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let history_limit = env::var("RELAY_HISTORY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.history_limit);

        let assistant_label = env::var("RELAY_ASSISTANT_LABEL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.assistant_label);

        let question_label = env::var("RELAY_QUESTION_LABEL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.question_label);

        Self {
            history_limit,
            assistant_label,
            question_label,
            ..defaults
        }
    }
}
