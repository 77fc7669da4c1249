//! Request orchestrator for the message relay.
//!
//! This crate provides the [`Orchestrator`] type which turns one inbound
//! channel message into one localized reply, coordinating the user store,
//! the message log, the translation service, and the reasoning agent.
//!
//! # Architecture
//!
//! ```text
//! Inbound message (from the api crate)
//!          ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ORCHESTRATOR                           │
//! │                                                             │
//! │  1. Determine language (caller hint or script detection)    │
//! │  2. Ensure user            (fatal on failure)               │
//! │  3. Translate to English   (falls back to raw text)         │
//! │  4. Fetch recent history   (falls back to none)             │
//! │  5. Log user turn          (best-effort)                    │
//! │  6. Ask agent              (failures become fixed replies)  │
//! │  7. Record activity        (best-effort)                    │
//! │  8. Translate reply back   (falls back to English)          │
//! │  9. Log assistant turn     (best-effort)                    │
//! │ 10. Respond                                                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only a user-store failure, or an unexpected failure anywhere in the
//! pipeline, produces an `error` response.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use orchestrator::{Orchestrator, OrchestratorConfig};
//! use relay_core::InboundMessage;
//!
//! let db = database::Database::connect("sqlite:relay.db?mode=rwc").await?;
//! db.migrate().await?;
//!
//! let orchestrator = Orchestrator::from_database(
//!     db,
//!     Arc::new(translation_client),
//!     Arc::new(agent_client),
//!     OrchestratorConfig::from_env(),
//! );
//!
//! let response = orchestrator
//!     .handle(InboundMessage::new("chat-1", "+15551234567", "Hello"))
//!     .await;
//! println!("{}", response.message);
//! ```

mod config;
mod context;
mod error;
mod orchestrator;
mod store;

pub use config::OrchestratorConfig;
pub use context::Context;
pub use error::{OrchestratorError, StoreError};
pub use orchestrator::{Orchestrator, ERROR_REPLY};
pub use store::{MessageLog, TurnRecord, UserStore};

// Re-export commonly used types from dependencies
pub use database::User;
pub use relay_core::{InboundMessage, Language, RelayResponse};
