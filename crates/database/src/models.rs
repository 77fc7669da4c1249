//! Database models.

use relay_core::Role;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A relay user, identified by phone number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Phone number (e.g., "+15551234567"), unique.
    pub phone_number: String,
    /// Creation timestamp (ISO-8601 UTC).
    pub created_at: String,
    /// Number of completed inbound messages.
    pub message_count: i64,
    /// Timestamp of the last completed inbound message.
    pub last_message: Option<String>,
    /// Free-form profile fields, passed through untouched.
    pub profile: Json<serde_json::Value>,
}

/// A stored conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Auto-incrementing ID (insertion order).
    pub id: i64,
    /// Owner phone number.
    pub phone_number: String,
    /// Chat/session identifier.
    pub chat_id: String,
    /// "user" or "assistant".
    pub role: String,
    /// Content in the user's language.
    pub content: String,
    /// English content, used for context building.
    pub content_en: String,
    /// Creation timestamp (ISO-8601 UTC).
    pub created_at: String,
}

/// A message to be appended to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage<'a> {
    pub phone_number: &'a str,
    pub chat_id: &'a str,
    pub role: Role,
    pub content: &'a str,
    /// English content; `None` or empty stores `content` in its place.
    pub content_en: Option<&'a str>,
}

impl<'a> NewMessage<'a> {
    /// Create a message with no separate English content.
    pub fn new(phone_number: &'a str, chat_id: &'a str, role: Role, content: &'a str) -> Self {
        Self {
            phone_number,
            chat_id,
            role,
            content,
            content_en: None,
        }
    }

    /// Attach English content.
    pub fn with_content_en(mut self, content_en: &'a str) -> Self {
        self.content_en = Some(content_en);
        self
    }

    /// The English content that will be stored.
    pub fn effective_content_en(&self) -> &'a str {
        match self.content_en {
            Some(en) if !en.is_empty() => en,
            _ => self.content,
        }
    }
}
