//! Append-only conversation log.

use sqlx::SqlitePool;

use crate::models::{Message, NewMessage};
use crate::Result;

/// Append a message to the log, returning its ID.
pub async fn insert_message(pool: &SqlitePool, message: &NewMessage<'_>) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO messages (phone_number, chat_id, role, content, content_en)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(message.phone_number)
    .bind(message.chat_id)
    .bind(message.role.as_str())
    .bind(message.content)
    .bind(message.effective_content_en())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Get the most recent messages for a phone number across all chats.
///
/// Rows are fetched newest-first and returned in chronological order.
pub async fn recent_history(
    pool: &SqlitePool,
    phone_number: &str,
    limit: i64,
) -> Result<Vec<Message>> {
    let mut rows = sqlx::query_as::<_, Message>(
        r#"
        SELECT id, phone_number, chat_id, role, content, content_en, created_at
        FROM messages
        WHERE phone_number = ?
        ORDER BY created_at DESC, id DESC
        LIMIT ?
        "#,
    )
    .bind(phone_number)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    rows.reverse();
    Ok(rows)
}

/// Count total messages.
pub async fn count_messages(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM messages
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Count distinct chat sessions that have at least one message.
pub async fn count_chats(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(DISTINCT chat_id) FROM messages
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use relay_core::Role;

    use super::*;
    use crate::test_db;

    #[tokio::test]
    async fn test_content_en_defaults_to_content() {
        let db = test_db().await;

        insert_message(db.pool(), &NewMessage::new("+1555", "c1", Role::User, "నమస్కారం"))
            .await
            .unwrap();
        insert_message(
            db.pool(),
            &NewMessage::new("+1555", "c1", Role::Assistant, "").with_content_en(""),
        )
        .await
        .unwrap();

        let history = recent_history(db.pool(), "+1555", 5).await.unwrap();
        assert_eq!(history[0].content, "నమస్కారం");
        assert_eq!(history[0].content_en, "నమస్కారం");
        assert_eq!(history[1].content_en, "");
    }

    #[tokio::test]
    async fn test_content_en_kept_when_given() {
        let db = test_db().await;

        insert_message(
            db.pool(),
            &NewMessage::new("+1555", "c1", Role::User, "नमस्ते").with_content_en("Hello"),
        )
        .await
        .unwrap();

        let history = recent_history(db.pool(), "+1555", 5).await.unwrap();
        assert_eq!(history[0].content, "नमस्ते");
        assert_eq!(history[0].content_en, "Hello");
        assert_eq!(history[0].role, "user");
    }

    #[tokio::test]
    async fn test_recent_history_returns_latest_in_order() {
        let db = test_db().await;

        let texts: Vec<String> = (1..=7).map(|i| format!("message {}", i)).collect();
        for (i, text) in texts.iter().enumerate() {
            let role = if i % 2 == 0 { Role::User } else { Role::Assistant };
            insert_message(db.pool(), &NewMessage::new("+1555", "c1", role, text))
                .await
                .unwrap();
        }

        let history = recent_history(db.pool(), "+1555", 5).await.unwrap();
        let contents: Vec<&str> = history.iter().map(|m| m.content_en.as_str()).collect();
        assert_eq!(
            contents,
            vec!["message 3", "message 4", "message 5", "message 6", "message 7"]
        );
    }

    #[tokio::test]
    async fn test_recent_history_spans_chats_and_filters_owner() {
        let db = test_db().await;

        insert_message(db.pool(), &NewMessage::new("+1555", "c1", Role::User, "first"))
            .await
            .unwrap();
        insert_message(db.pool(), &NewMessage::new("+1666", "c9", Role::User, "other"))
            .await
            .unwrap();
        insert_message(db.pool(), &NewMessage::new("+1555", "c2", Role::User, "second"))
            .await
            .unwrap();

        let history = recent_history(db.pool(), "+1555", 5).await.unwrap();
        let contents: Vec<&str> = history.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_recent_history_empty() {
        let db = test_db().await;
        let history = recent_history(db.pool(), "+1555", 5).await.unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_counts() {
        let db = test_db().await;

        insert_message(db.pool(), &NewMessage::new("+1555", "c1", Role::User, "a"))
            .await
            .unwrap();
        insert_message(db.pool(), &NewMessage::new("+1555", "c1", Role::Assistant, "b"))
            .await
            .unwrap();
        insert_message(db.pool(), &NewMessage::new("+1666", "c2", Role::User, "c"))
            .await
            .unwrap();

        assert_eq!(count_messages(db.pool()).await.unwrap(), 3);
        assert_eq!(count_chats(db.pool()).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_role_stored_as_wire_name() {
        let db = test_db().await;

        insert_message(db.pool(), &NewMessage::new("+1555", "c1", Role::User, "q"))
            .await
            .unwrap();
        insert_message(db.pool(), &NewMessage::new("+1555", "c1", Role::Assistant, "a"))
            .await
            .unwrap();

        let history = recent_history(db.pool(), "+1555", 5).await.unwrap();
        let roles: Vec<Option<Role>> = history.iter().map(|m| Role::parse(&m.role)).collect();
        assert_eq!(roles, vec![Some(Role::User), Some(Role::Assistant)]);
        assert_eq!(history[0].role, "user");
        assert_eq!(history[1].role, "assistant");
    }
}
