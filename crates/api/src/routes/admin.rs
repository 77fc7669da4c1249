//! Admin dashboard endpoints.

use axum::extract::State;
use axum::Json;
use database::{message, user, User};
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

/// Maximum users returned by the listing.
const USER_LIST_LIMIT: i64 = 100;

/// Platform statistics.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_users: i64,
    pub total_messages: i64,
    pub active_sessions: i64,
    pub platform_health: &'static str,
}

/// Most recently created users, newest first.
pub async fn users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = user::list_users(state.db.pool(), USER_LIST_LIMIT).await?;
    Ok(Json(users))
}

/// Aggregate counts for the dashboard.
pub async fn stats(State(state): State<AppState>) -> Result<Json<Stats>> {
    let pool = state.db.pool();

    Ok(Json(Stats {
        total_users: user::count_users(pool).await?,
        total_messages: message::count_messages(pool).await?,
        active_sessions: message::count_chats(pool).await?,
        platform_health: "Healthy",
    }))
}
