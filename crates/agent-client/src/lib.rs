//! HTTP client for the external reasoning agent.
//!
//! [`AgentClient`] posts `{chatId, phone_number, message, language}` to the
//! configured agent URL and returns the `response` field of the JSON reply.
//! It never returns an error to the caller: every transport or protocol
//! failure is mapped to one fixed, user-facing English sentence (see
//! [`AgentFailure::user_message`]) so raw error text never reaches the
//! messaging channel.
//!
//! # Example
//!
//! ```no_run
//! use agent_client::{AgentClient, AgentConfig};
//! use relay_core::{Agent, AgentRequest, Language};
//!
//! # async fn example() -> Result<(), agent_client::AgentError> {
//! let client = AgentClient::new(AgentConfig::from_env()?)?;
//! let reply = client
//!     .ask(AgentRequest {
//!         chat_id: "chat-1".to_string(),
//!         phone_number: "+15551234567".to_string(),
//!         message: "When should I sow cotton?".to_string(),
//!         language: Language::English,
//!     })
//!     .await;
//! println!("{}", reply);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod failure;

pub use client::{AgentClient, AgentHealth, NO_RESPONSE};
pub use config::{AgentConfig, DEFAULT_AGENT_TIMEOUT};
pub use error::AgentError;
pub use failure::AgentFailure;
