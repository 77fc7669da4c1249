//! Main orchestrator that runs the request pipeline.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use database::Database;
use futures::FutureExt;
use relay_core::{
    Agent, AgentRequest, InboundMessage, Language, RelayResponse, Role, TranslationRequest,
    Translator,
};
use tracing::{debug, error, info, warn};

use crate::config::OrchestratorConfig;
use crate::context::Context;
use crate::error::OrchestratorError;
use crate::store::{MessageLog, TurnRecord, UserStore};

/// Apology returned on the error path.
pub const ERROR_REPLY: &str =
    "Sorry, something went wrong processing your request. Please try again later.";

/// Runs one inbound message through storage, translation, and the agent.
///
/// All collaborators are injected at construction; the orchestrator holds
/// no other state and is shared across concurrent requests.
pub struct Orchestrator {
    users: Arc<dyn UserStore>,
    messages: Arc<dyn MessageLog>,
    translator: Arc<dyn Translator>,
    agent: Arc<dyn Agent>,
    config: OrchestratorConfig,
}

impl Orchestrator {
    /// Create a new orchestrator with the given components.
    pub fn new(
        users: Arc<dyn UserStore>,
        messages: Arc<dyn MessageLog>,
        translator: Arc<dyn Translator>,
        agent: Arc<dyn Agent>,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            users,
            messages,
            translator,
            agent,
            config,
        }
    }

    /// Create an orchestrator that uses one database for users and messages.
    pub fn from_database(
        db: Database,
        translator: Arc<dyn Translator>,
        agent: Arc<dyn Agent>,
        config: OrchestratorConfig,
    ) -> Self {
        let db = Arc::new(db);
        Self::new(db.clone(), db, translator, agent, config)
    }

    /// Process an inbound message end-to-end.
    ///
    /// Always returns a response: failures that abort the pipeline, including
    /// panics, become an `error` response carrying a fixed apology.
    pub async fn handle(&self, message: InboundMessage) -> RelayResponse {
        info!(
            chat_id = %message.chat_id,
            phone_number = %message.phone_number,
            "New inbound message: {}",
            preview(&message.message)
        );

        let outcome = AssertUnwindSafe(self.run(&message))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(OrchestratorError::Panicked(panic_message(&*panic))));

        match outcome {
            Ok(response) => {
                info!(
                    chat_id = %response.chat_id,
                    language = %message_language(&response),
                    "Request complete"
                );
                response
            }
            Err(e) => {
                error!(
                    chat_id = %message.chat_id,
                    phone_number = %message.phone_number,
                    "Request failed: {}",
                    e
                );
                RelayResponse::error(&message, ERROR_REPLY, now())
            }
        }
    }

    /// The pipeline proper. Steps run strictly in order.
    async fn run(&self, message: &InboundMessage) -> Result<RelayResponse, OrchestratorError> {
        // 1. Determine language
        let language = Language::from_request(message.language.as_deref(), &message.message);
        debug!("Resolved language: {}", language);

        // 2. Ensure user (fatal)
        let user = self
            .users
            .ensure(&message.phone_number)
            .await
            .map_err(OrchestratorError::UserStore)?;
        debug!(
            "User {} has {} prior messages",
            user.phone_number, user.message_count
        );

        // 3. Normalize to English
        let english_message = if language.is_english() {
            message.message.clone()
        } else {
            self.translate_or_keep(
                &message.message,
                language.clone(),
                Language::English,
                self.config.inbound_translation_timeout,
            )
            .await
        };

        // 4. Assemble context
        let history = self
            .messages
            .recent_history(&message.phone_number, self.config.history_limit)
            .await
            .unwrap_or_else(|e| {
                warn!("Failed to fetch history for {}: {}", message.phone_number, e);
                Vec::new()
            });
        let context = Context::from_history(history);
        let prompt = context.build_prompt(&english_message, &self.config);
        debug!("Prompt built with {} history turns", context.turn_count());

        // 5. Persist inbound turn before asking the agent
        self.log_turn(TurnRecord {
            phone_number: message.phone_number.clone(),
            chat_id: message.chat_id.clone(),
            role: Role::User,
            content: message.message.clone(),
            content_en: Some(english_message),
        })
        .await;

        // 6. Invoke agent
        let reply_en = self
            .agent
            .ask(AgentRequest {
                chat_id: message.chat_id.clone(),
                phone_number: user.phone_number.clone(),
                message: prompt,
                language: language.clone(),
            })
            .await;

        // 7. Record activity
        if let Err(e) = self.users.record_activity(&message.phone_number).await {
            warn!(
                "Could not update message count for {}: {}",
                message.phone_number, e
            );
        }

        // 8. Localize reply
        let reply = if language.is_english() {
            reply_en.clone()
        } else {
            self.translate_or_keep(
                &reply_en,
                Language::English,
                language.clone(),
                self.config.reply_translation_timeout,
            )
            .await
        };

        // 9. Persist outbound turn
        self.log_turn(TurnRecord {
            phone_number: message.phone_number.clone(),
            chat_id: message.chat_id.clone(),
            role: Role::Assistant,
            content: reply.clone(),
            content_en: Some(reply_en),
        })
        .await;

        // 10. Respond
        Ok(RelayResponse::success(message, reply, language, now()))
    }

    /// Translate text, keeping the original on any failure.
    async fn translate_or_keep(
        &self,
        text: &str,
        source: Language,
        target: Language,
        timeout: Duration,
    ) -> String {
        let request = TranslationRequest::new(text, source.clone(), target.clone(), timeout);
        match self.translator.translate(request).await {
            Ok(translated) => {
                info!("Translated {} -> {}: {}", source, target, preview(&translated));
                translated
            }
            Err(e) => {
                warn!("Translation {} -> {} failed, keeping original: {}", source, target, e);
                text.to_string()
            }
        }
    }

    /// Append a turn to the log; a lost write only degrades future context.
    async fn log_turn(&self, turn: TurnRecord) {
        let role = turn.role;
        if let Err(e) = self.messages.append(turn).await {
            warn!("Failed to save {} message: {}", role.as_str(), e);
        }
    }
}

/// Current time as an ISO-8601 UTC string.
fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn preview(text: &str) -> String {
    text.chars().take(100).collect()
}

fn message_language(response: &RelayResponse) -> &str {
    response
        .language
        .as_ref()
        .map(|language| language.code())
        .unwrap_or("-")
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
