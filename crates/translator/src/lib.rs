//! HTTP client for the external text-translation service.
//!
//! The service exposes `POST /translate` taking
//! `{"text", "target_lang", "source_lang"}` and answering
//! `{"translated_text"}`. [`TranslationClient`] implements
//! [`relay_core::Translator`]; every failure comes back as a
//! [`TranslateError`] so callers can keep the original text.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use relay_core::{Language, TranslationRequest, Translator};
//! use translator::{TranslationClient, TranslatorConfig};
//!
//! # async fn example() -> Result<(), relay_core::TranslateError> {
//! let client = TranslationClient::new(TranslatorConfig::from_env())?;
//! let english = client
//!     .translate(TranslationRequest::new(
//!         "నమస్కారం",
//!         Language::Telugu,
//!         Language::English,
//!         Duration::from_secs(20),
//!     ))
//!     .await?;
//! println!("{}", english);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;

pub use client::TranslationClient;
pub use config::{TranslatorConfig, DEFAULT_TRANSLATOR_URL};

pub use relay_core::TranslateError;
