//! SQLite persistence layer for the message relay.
//!
//! This crate provides async database operations for relay users and the
//! append-only message log using SQLx with SQLite.
//!
//! # Example
//!
//! ```no_run
//! use database::{message, user, Database, NewMessage};
//! use relay_core::Role;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:relay.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Find or create a user
//!     let user = user::ensure_user(db.pool(), "+15551234567").await?;
//!     assert_eq!(user.message_count, 0);
//!
//!     // Log a turn
//!     message::insert_message(
//!         db.pool(),
//!         &NewMessage::new("+15551234567", "chat-1", Role::User, "Hello"),
//!     )
//!     .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod message;
pub mod models;
pub mod user;

pub use error::{DatabaseError, Result};
pub use models::{Message, NewMessage, User};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    /// Set high enough to handle concurrent inbound requests.
    pub const DEFAULT_POOL_SIZE: u32 = 20;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:data/relay.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = database::Database::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to database: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Check that the database answers a trivial query.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
pub(crate) async fn test_db() -> Database {
    // A single connection keeps every query on the same in-memory database.
    let db = Database::connect_with_pool_size("sqlite::memory:", 1)
        .await
        .unwrap();
    db.migrate().await.unwrap();
    db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ping() {
        let db = test_db().await;
        db.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_ping_after_close_fails() {
        let db = test_db().await;
        db.close().await;
        assert!(db.ping().await.is_err());
    }

    #[tokio::test]
    async fn test_user_and_message_flow() {
        let db = test_db().await;

        let user = user::ensure_user(db.pool(), "+15551234567").await.unwrap();
        assert_eq!(user.message_count, 0);

        message::insert_message(
            db.pool(),
            &NewMessage::new("+15551234567", "chat-1", relay_core::Role::User, "Hello"),
        )
        .await
        .unwrap();
        user::record_activity(db.pool(), "+15551234567").await.unwrap();

        let user = user::get_user(db.pool(), "+15551234567").await.unwrap();
        assert_eq!(user.message_count, 1);
        assert_eq!(message::count_messages(db.pool()).await.unwrap(), 1);
    }
}
