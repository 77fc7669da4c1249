//! Core traits and types for the message relay.
//!
//! This crate provides the shared vocabulary used by every other crate in
//! the relay workspace:
//!
//! - [`InboundMessage`] / [`RelayResponse`] - The channel-facing payloads
//! - [`Language`] and [`detect_language`] - Script-based language detection
//! - [`Role`] / [`HistoryTurn`] - Conversation turns used to build context
//! - [`Translator`] / [`Agent`] - Traits for the two remote services
//! - [`TranslateError`] - Error type for translation calls
//!
//! # Example
//!
//! ```rust
//! use relay_core::{detect_language, Language};
//!
//! assert_eq!(detect_language("నమస్కారం"), Language::Telugu);
//! assert_eq!(detect_language("नमस्ते"), Language::Hindi);
//! assert_eq!(detect_language("Hello"), Language::English);
//! ```

mod error;
mod language;
mod message;
mod services;

pub use error::TranslateError;
pub use language::{detect_language, Language, DEFAULT_LANGUAGE};
pub use message::{HistoryTurn, InboundMessage, RelayResponse, ResponseStatus, Role};
pub use services::{Agent, AgentRequest, TranslationRequest, Translator};

// Re-export async_trait for implementors
pub use async_trait::async_trait;
