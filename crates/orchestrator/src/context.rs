//! Context builder that prepends recent history to the agent prompt.

use relay_core::{HistoryTurn, Role};

use crate::config::OrchestratorConfig;

/// Recent conversation gathered before asking the agent.
///
/// Turns are held in chronological order and rendered in English.
#[derive(Debug, Clone, Default)]
pub struct Context {
    history: Vec<HistoryTurn>,
}

impl Context {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context from turns in chronological order.
    pub fn from_history(history: Vec<HistoryTurn>) -> Self {
        Self { history }
    }

    /// Check if the context has any history.
    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    /// Get the number of turns.
    pub fn turn_count(&self) -> usize {
        self.history.len()
    }

    /// Render the history block.
    ///
    /// Returns an empty string when there is no history.
    pub fn format_history(&self, config: &OrchestratorConfig) -> String {
        if !self.has_history() {
            return String::new();
        }

        let mut block = String::from("\n--- Recent Conversation History (for context) ---\n");
        for turn in &self.history {
            let prefix = match turn.role {
                Role::User => "User",
                Role::Assistant => config.assistant_label.as_str(),
            };
            block.push_str(&format!("{}: {}\n", prefix, turn.content_en));
        }
        block.push_str("--- End of History ---\n\n");
        block
    }

    /// Build the prompt sent to the agent.
    ///
    /// Without history the English message is returned verbatim.
    pub fn build_prompt(&self, english_message: &str, config: &OrchestratorConfig) -> String {
        if !self.has_history() {
            return english_message.to_string();
        }

        format!(
            "{}{}: {}",
            self.format_history(config),
            config.question_label,
            english_message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context() {
        let context = Context::new();
        assert!(!context.has_history());
        assert_eq!(context.turn_count(), 0);
        assert_eq!(context.format_history(&OrchestratorConfig::default()), "");
    }

    #[test]
    fn test_prompt_without_history_is_verbatim() {
        let context = Context::new();
        let prompt = context.build_prompt("Hello", &OrchestratorConfig::default());
        assert_eq!(prompt, "Hello");
    }

    #[test]
    fn test_prompt_with_history() {
        let context = Context::from_history(vec![
            HistoryTurn::new(Role::User, "My cotton leaves are yellow"),
            HistoryTurn::new(Role::Assistant, "Check for nitrogen deficiency"),
        ]);

        let prompt = context.build_prompt("What fertilizer?", &OrchestratorConfig::default());
        assert_eq!(
            prompt,
            "\n--- Recent Conversation History (for context) ---\n\
             User: My cotton leaves are yellow\n\
             AgriGPT: Check for nitrogen deficiency\n\
             --- End of History ---\n\n\
             Farmer's current question: What fertilizer?"
        );
    }

    #[test]
    fn test_custom_labels() {
        let config = OrchestratorConfig {
            assistant_label: "Bot".to_string(),
            question_label: "Question".to_string(),
            ..OrchestratorConfig::default()
        };
        let context = Context::from_history(vec![HistoryTurn::new(Role::Assistant, "Hi")]);

        let prompt = context.build_prompt("Next?", &config);
        assert!(prompt.contains("Bot: Hi\n"));
        assert!(prompt.ends_with("Question: Next?"));
    }
}
