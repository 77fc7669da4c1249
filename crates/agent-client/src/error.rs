//! Error types for agent client setup.

use thiserror::Error;

/// Errors raised while building an [`crate::AgentClient`].
///
/// Calls to the agent itself never fail; see [`crate::AgentFailure`].
#[derive(Debug, Error)]
pub enum AgentError {
    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
