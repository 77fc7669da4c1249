//! User lookup, creation, and activity counters.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::User;

/// Create a new user with a zero message count.
///
/// Returns [`DatabaseError::AlreadyExists`] if the phone number is taken.
pub async fn create_user(pool: &SqlitePool, phone_number: &str) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (phone_number)
        VALUES (?)
        RETURNING phone_number, created_at, message_count, last_message, profile
        "#,
    )
    .bind(phone_number)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "User",
                    id: phone_number.to_string(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })
}

/// Find a user by phone number.
pub async fn find_user(pool: &SqlitePool, phone_number: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT phone_number, created_at, message_count, last_message, profile
        FROM users
        WHERE phone_number = ?
        "#,
    )
    .bind(phone_number)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get a user by phone number.
pub async fn get_user(pool: &SqlitePool, phone_number: &str) -> Result<User> {
    find_user(pool, phone_number)
        .await?
        .ok_or_else(|| DatabaseError::NotFound {
            entity: "User",
            id: phone_number.to_string(),
        })
}

/// Find a user by phone number, creating it if absent.
///
/// Two concurrent first messages from the same number can both miss the
/// lookup; the loser of the insert race gets a unique violation and
/// re-fetches the winner's row.
pub async fn ensure_user(pool: &SqlitePool, phone_number: &str) -> Result<User> {
    if let Some(user) = find_user(pool, phone_number).await? {
        tracing::debug!("Found existing user {}", phone_number);
        return Ok(user);
    }

    match create_user(pool, phone_number).await {
        Ok(user) => {
            tracing::info!("Created new user {}", phone_number);
            Ok(user)
        }
        Err(DatabaseError::AlreadyExists { .. }) => {
            tracing::debug!("User {} created concurrently, re-fetching", phone_number);
            get_user(pool, phone_number).await
        }
        Err(e) => Err(e),
    }
}

/// Increment the message count and refresh the last-message timestamp.
pub async fn record_activity(pool: &SqlitePool, phone_number: &str) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET message_count = message_count + 1,
            last_message = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
        WHERE phone_number = ?
        "#,
    )
    .bind(phone_number)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "User",
            id: phone_number.to_string(),
        });
    }

    Ok(())
}

/// List users, newest first.
pub async fn list_users(pool: &SqlitePool, limit: i64) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT phone_number, created_at, message_count, last_message, profile
        FROM users
        ORDER BY created_at DESC, rowid DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Count total users.
pub async fn count_users(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM users
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_db;

    #[tokio::test]
    async fn test_ensure_creates_then_returns_same_record() {
        let db = test_db().await;

        let first = ensure_user(db.pool(), "+15550001").await.unwrap();
        assert_eq!(first.phone_number, "+15550001");
        assert_eq!(first.message_count, 0);
        assert!(first.last_message.is_none());
        assert_eq!(first.profile.0, serde_json::json!({}));

        let second = ensure_user(db.pool(), "+15550001").await.unwrap();
        assert_eq!(second, first);
        assert_eq!(count_users(db.pool()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_duplicate_reports_already_exists() {
        let db = test_db().await;

        create_user(db.pool(), "+15550002").await.unwrap();
        let result = create_user(db.pool(), "+15550002").await;
        assert!(matches!(result, Err(DatabaseError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_concurrent_ensure_yields_one_user() {
        let db = test_db().await;

        let (a, b) = tokio::join!(
            ensure_user(db.pool(), "+15550003"),
            ensure_user(db.pool(), "+15550003")
        );
        assert_eq!(a.unwrap().phone_number, "+15550003");
        assert_eq!(b.unwrap().phone_number, "+15550003");
        assert_eq!(count_users(db.pool()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_user() {
        let db = test_db().await;
        let result = get_user(db.pool(), "+15550004").await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
        assert!(find_user(db.pool(), "+15550004").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_record_activity_increments_by_n() {
        let db = test_db().await;
        ensure_user(db.pool(), "+15550005").await.unwrap();

        let mut previous: Option<String> = None;
        for _ in 0..4 {
            record_activity(db.pool(), "+15550005").await.unwrap();
            let user = get_user(db.pool(), "+15550005").await.unwrap();
            let last = user.last_message.clone().unwrap();
            if let Some(prev) = previous {
                assert!(last >= prev);
            }
            previous = Some(last);
        }

        let user = get_user(db.pool(), "+15550005").await.unwrap();
        assert_eq!(user.message_count, 4);
    }

    #[tokio::test]
    async fn test_record_activity_unknown_user() {
        let db = test_db().await;
        let result = record_activity(db.pool(), "+15550006").await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_users_newest_first() {
        let db = test_db().await;
        ensure_user(db.pool(), "+15550007").await.unwrap();
        ensure_user(db.pool(), "+15550008").await.unwrap();
        ensure_user(db.pool(), "+15550009").await.unwrap();

        let users = list_users(db.pool(), 2).await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].phone_number, "+15550009");
        assert_eq!(users[1].phone_number, "+15550008");
    }

    #[tokio::test]
    async fn test_user_serializes_camel_case() {
        let db = test_db().await;
        let user = ensure_user(db.pool(), "+15550010").await.unwrap();

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["phoneNumber"], "+15550010");
        assert_eq!(json["messageCount"], 0);
        assert!(json["lastMessage"].is_null());
        assert_eq!(json["profile"], serde_json::json!({}));
    }
}
