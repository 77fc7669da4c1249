//! User store and message log traits, with their SQLite implementation.

use async_trait::async_trait;
use database::{message, user, Database, NewMessage, User};
use relay_core::{HistoryTurn, Role};
use tracing::warn;

use crate::error::StoreError;

/// Find-or-create access to users, plus activity counters.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by phone number, creating it with a zero count if absent.
    async fn ensure(&self, phone_number: &str) -> Result<User, StoreError>;

    /// Increment the message count and refresh the last-message timestamp.
    async fn record_activity(&self, phone_number: &str) -> Result<(), StoreError>;
}

/// One conversation turn to append to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub phone_number: String,
    pub chat_id: String,
    pub role: Role,
    /// Content in the user's language.
    pub content: String,
    /// English content; `None` stores `content` in its place.
    pub content_en: Option<String>,
}

/// Append-only conversation log.
#[async_trait]
pub trait MessageLog: Send + Sync {
    /// Append one immutable turn.
    async fn append(&self, turn: TurnRecord) -> Result<(), StoreError>;

    /// The `limit` most recent turns for a phone number across all chats,
    /// oldest first.
    async fn recent_history(
        &self,
        phone_number: &str,
        limit: usize,
    ) -> Result<Vec<HistoryTurn>, StoreError>;
}

#[async_trait]
impl UserStore for Database {
    async fn ensure(&self, phone_number: &str) -> Result<User, StoreError> {
        Ok(user::ensure_user(self.pool(), phone_number).await?)
    }

    async fn record_activity(&self, phone_number: &str) -> Result<(), StoreError> {
        Ok(user::record_activity(self.pool(), phone_number).await?)
    }
}

#[async_trait]
impl MessageLog for Database {
    async fn append(&self, turn: TurnRecord) -> Result<(), StoreError> {
        let mut new_message = NewMessage::new(
            &turn.phone_number,
            &turn.chat_id,
            turn.role,
            &turn.content,
        );
        if let Some(ref content_en) = turn.content_en {
            new_message = new_message.with_content_en(content_en);
        }

        message::insert_message(self.pool(), &new_message).await?;
        Ok(())
    }

    async fn recent_history(
        &self,
        phone_number: &str,
        limit: usize,
    ) -> Result<Vec<HistoryTurn>, StoreError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = message::recent_history(self.pool(), phone_number, limit).await?;

        let turns = rows
            .into_iter()
            .filter_map(|row| match Role::parse(&row.role) {
                Some(role) => Some(HistoryTurn::new(role, row.content_en)),
                None => {
                    warn!("Skipping message {} with unknown role {}", row.id, row.role);
                    None
                }
            })
            .collect();

        Ok(turns)
    }
}
