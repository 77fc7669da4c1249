//! Channel payloads and conversation turns.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// An inbound message from the messaging channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Chat/session identifier grouping messages into a thread.
    #[serde(rename = "chatId")]
    pub chat_id: String,
    /// Sender phone number, the stable identity of the user.
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    /// Raw message text as typed by the user.
    pub message: String,
    /// Language code hint from the channel (defaults to `en` when absent).
    #[serde(default)]
    pub language: Option<String>,
}

impl InboundMessage {
    /// Create an inbound message without a language hint.
    pub fn new(
        chat_id: impl Into<String>,
        phone_number: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            phone_number: phone_number.into(),
            message: message.into(),
            language: None,
        }
    }

    /// Set the language hint.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Outcome marker carried in every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// The reply returned to the messaging channel.
///
/// The error shape carries no `language` key; it is skipped when `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    #[serde(rename = "chatId")]
    pub chat_id: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    /// Localized reply text, or an apology on the error path.
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// ISO-8601 UTC timestamp.
    pub timestamp: String,
    pub status: ResponseStatus,
}

impl RelayResponse {
    /// Build a success response for an inbound message.
    pub fn success(
        inbound: &InboundMessage,
        message: impl Into<String>,
        language: Language,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            chat_id: inbound.chat_id.clone(),
            phone_number: inbound.phone_number.clone(),
            message: message.into(),
            language: Some(language),
            timestamp: timestamp.into(),
            status: ResponseStatus::Success,
        }
    }

    /// Build an error response for an inbound message.
    pub fn error(
        inbound: &InboundMessage,
        message: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            chat_id: inbound.chat_id.clone(),
            phone_number: inbound.phone_number.clone(),
            message: message.into(),
            language: None,
            timestamp: timestamp.into(),
            status: ResponseStatus::Error,
        }
    }

    /// Whether this is a success response.
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}

/// Author of a stored conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    /// Parse the storage representation.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

/// One past turn in English, used to build the agent prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryTurn {
    pub role: Role,
    pub content_en: String,
}

impl HistoryTurn {
    pub fn new(role: Role, content_en: impl Into<String>) -> Self {
        Self {
            role,
            content_en: content_en.into(),
        }
    }
}
