//! HTTP relay between a WhatsApp channel and the reasoning agent.
//!
//! Receives inbound chat messages, runs them through the orchestrator, and
//! exposes health and admin endpoints.

mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use agent_client::AgentClient;
use database::Database;
use orchestrator::Orchestrator;
use tracing::info;
use translator::TranslationClient;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting relay server");

    // Connect to database
    let db = Database::connect_with_pool_size(&config.database_url, config.pool_size).await?;
    db.migrate().await?;

    // Remote services
    let translator = Arc::new(TranslationClient::new(config.translator.clone())?);
    let agent = Arc::new(AgentClient::new(config.agent.clone())?);

    let orchestrator = Orchestrator::from_database(
        db.clone(),
        translator,
        agent.clone(),
        config.orchestrator.clone(),
    );

    // Build application state
    let state = AppState::new(db.clone(), orchestrator, agent);

    // Build router
    let app = routes::router()
        .layer(routes::cors(config.allowed_origin.clone()))
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Relay server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    db.close().await;
    Ok(())
}
