//! Agent call failures and their user-facing replies.

use thiserror::Error;

/// Why an agent call did not produce a reply.
///
/// Each variant maps to exactly one sentence via [`AgentFailure::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentFailure {
    /// The call exceeded its timeout.
    #[error("agent request timed out")]
    Timeout,

    /// HTTP 405.
    #[error("agent returned 405 Method Not Allowed")]
    MethodNotAllowed,

    /// HTTP 422.
    #[error("agent returned 422 Unprocessable Entity")]
    UnprocessableRequest,

    /// HTTP 5xx.
    #[error("agent server error: {0}")]
    ServerError(u16),

    /// Any other HTTP 4xx.
    #[error("agent client error: {0}")]
    ClientError(u16),

    /// A non-2xx status below 400 (redirects are not followed).
    #[error("agent unexpected status: {0}")]
    UnexpectedStatus(u16),

    /// The agent could not be reached.
    #[error("agent connection failed: {0}")]
    Connection(String),

    /// Any other request or network error.
    #[error("agent request failed: {0}")]
    Request(String),

    /// The response body was not valid JSON.
    #[error("agent returned invalid JSON: {0}")]
    InvalidJson(String),

    /// Anything else.
    #[error("unexpected agent error: {0}")]
    Unexpected(String),
}

impl AgentFailure {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        match status {
            405 => AgentFailure::MethodNotAllowed,
            422 => AgentFailure::UnprocessableRequest,
            s if s >= 500 => AgentFailure::ServerError(s),
            s if s >= 400 => AgentFailure::ClientError(s),
            s => AgentFailure::UnexpectedStatus(s),
        }
    }

    /// Classify a transport error from reqwest.
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            AgentFailure::Timeout
        } else if err.is_connect() {
            AgentFailure::Connection(err.to_string())
        } else {
            AgentFailure::Request(err.to_string())
        }
    }

    /// The sentence sent to the end user in place of an agent reply.
    pub fn user_message(&self) -> String {
        match self {
            AgentFailure::Timeout => {
                "Sorry, our service is taking longer than expected. Please try again in a few moments."
                    .to_string()
            }
            AgentFailure::MethodNotAllowed => {
                "Sorry, our AI assistant is currently unavailable. We're working to restore the service. Please try again later."
                    .to_string()
            }
            AgentFailure::UnprocessableRequest => {
                "Sorry, there was an issue with your request format. Please try again.".to_string()
            }
            AgentFailure::ServerError(_) => {
                "Sorry, our AI assistant is experiencing technical difficulties. Please try again in a few minutes."
                    .to_string()
            }
            AgentFailure::ClientError(_) => {
                "Sorry, we're unable to process your request right now. Please try again later."
                    .to_string()
            }
            AgentFailure::UnexpectedStatus(status) => format!("Agent error: {}", status),
            AgentFailure::Connection(_) => {
                "Sorry, our AI assistant is currently offline. We're working to restore the service. Please check back soon."
                    .to_string()
            }
            AgentFailure::Request(_) => {
                "Sorry, we're having trouble connecting to our AI assistant. Please try again in a few moments."
                    .to_string()
            }
            AgentFailure::InvalidJson(_) => {
                "Sorry, we received an invalid response from our AI assistant. Please try again."
                    .to_string()
            }
            AgentFailure::Unexpected(_) => {
                "Sorry, something went wrong. Please try again later.".to_string()
            }
        }
    }
}
