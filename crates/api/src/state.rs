//! Application state shared across handlers.

use std::sync::Arc;

use agent_client::AgentClient;
use database::Database;
use orchestrator::Orchestrator;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Request pipeline.
    pub orchestrator: Arc<Orchestrator>,
    /// Agent client, used for health probes.
    pub agent: Arc<AgentClient>,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, orchestrator: Orchestrator, agent: Arc<AgentClient>) -> Self {
        Self {
            db,
            orchestrator: Arc::new(orchestrator),
            agent,
        }
    }
}
