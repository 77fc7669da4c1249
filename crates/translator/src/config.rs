//! Configuration for the translation client.

use std::env;

/// Base URL used when `SPEECH_SVC_URL` is not set.
pub const DEFAULT_TRANSLATOR_URL: &str = "http://localhost:8001";

/// Configuration for [`crate::TranslationClient`].
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// Base URL of the speech/translation service, without trailing slash.
    pub base_url: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_TRANSLATOR_URL.to_string(),
        }
    }
}

impl TranslatorConfig {
    /// Create a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SPEECH_SVC_URL` - Base URL (default: http://localhost:8001)
    pub fn from_env() -> Self {
        env::var("SPEECH_SVC_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    /// Full URL of the translate endpoint.
    pub fn translate_url(&self) -> String {
        format!("{}/translate", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TranslatorConfig::default();
        assert_eq!(config.translate_url(), "http://localhost:8001/translate");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = TranslatorConfig::new("http://speech:9000/");
        assert_eq!(config.translate_url(), "http://speech:9000/translate");
    }
}
