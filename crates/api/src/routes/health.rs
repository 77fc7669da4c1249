//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::warn;

use super::{SERVICE_NAME, SERVICE_VERSION};
use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub dependencies: Dependencies,
}

#[derive(Serialize)]
pub struct Dependencies {
    pub database: String,
    pub agent_service: String,
}

/// Probe the database and the agent.
///
/// The service is `degraded` when the database is unreachable; agent status
/// is reported but does not affect the overall status.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    let (database, db_connected) = match state.db.ping().await {
        Ok(()) => ("connected".to_string(), true),
        Err(e) => {
            warn!("Health check database error: {}", e);
            (format!("error: {}", e), false)
        }
    };

    let agent_service = state.agent.health().await.describe();

    Json(Health {
        status: if db_connected { "healthy" } else { "degraded" },
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        dependencies: Dependencies {
            database,
            agent_service,
        },
    })
}
