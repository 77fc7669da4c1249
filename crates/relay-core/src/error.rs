//! Error types for translation calls.

use thiserror::Error;

/// Errors that can occur while translating text.
///
/// Translation is always best-effort: callers keep the original text when
/// any of these is returned.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The client could not be configured.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request did not complete within its timeout.
    #[error("translation timed out")]
    Timeout,

    /// The request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-200 status.
    #[error("translation service returned status {0}")]
    Status(u16),

    /// The response body was not the expected JSON shape.
    #[error("malformed translation response: {0}")]
    Malformed(String),
}
