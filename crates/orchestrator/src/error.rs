//! Error types for orchestrator operations.

use database::DatabaseError;
use thiserror::Error;

/// Errors from the user store or message log.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),
}

/// Errors that abort the pipeline and produce an error response.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The user could not be looked up or created.
    #[error("user store failed: {0}")]
    UserStore(#[source] StoreError),

    /// The pipeline panicked.
    #[error("pipeline panicked: {0}")]
    Panicked(String),
}
