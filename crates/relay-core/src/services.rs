//! Traits for the remote translation and reasoning services.
//!
//! Both services are opaque HTTP endpoints. The traits let the orchestrator
//! depend on behavior rather than on `reqwest`, and let tests swap in
//! scripted implementations.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::TranslateError;
use crate::language::Language;

/// A single translation call.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    /// Text to translate.
    pub text: String,
    /// Language the text is written in.
    pub source: Language,
    /// Language to translate into.
    pub target: Language,
    /// Upper bound for the whole call.
    pub timeout: Duration,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source: Language,
        target: Language,
        timeout: Duration,
    ) -> Self {
        Self {
            text: text.into(),
            source,
            target,
            timeout,
        }
    }
}

/// A text translation service.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate text, returning the translated string.
    ///
    /// Callers treat every error as "keep the original text".
    async fn translate(&self, request: TranslationRequest) -> Result<String, TranslateError>;
}

/// Payload sent to the reasoning agent.
///
/// Field names follow the agent's wire contract, which mixes camel and snake
/// case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentRequest {
    #[serde(rename = "chatId")]
    pub chat_id: String,
    pub phone_number: String,
    /// Prompt text, possibly prefixed with recent history.
    pub message: String,
    pub language: Language,
}

/// The external reasoning service.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Ask the agent for a reply.
    ///
    /// Transport failures are not errors here: implementations return a
    /// fixed user-facing sentence instead, so this always yields reply text.
    async fn ask(&self, request: AgentRequest) -> String;
}
