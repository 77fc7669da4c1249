//! Translation service HTTP client.

use relay_core::{async_trait, TranslateError, TranslationRequest, Translator};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::TranslatorConfig;

/// Request body for `POST /translate`.
#[derive(Debug, Serialize)]
struct TranslateBody<'a> {
    text: &'a str,
    target_lang: &'a str,
    source_lang: &'a str,
}

/// Response body from `POST /translate`.
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translated_text: Option<String>,
}

/// Client for the external translation service.
#[derive(Clone)]
pub struct TranslationClient {
    http: Client,
    config: TranslatorConfig,
}

impl TranslationClient {
    /// Create a new client. Timeouts are set per request.
    pub fn new(config: TranslatorConfig) -> Result<Self, TranslateError> {
        let http = Client::builder().build().map_err(|e| {
            TranslateError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { http, config })
    }
}

fn classify(err: reqwest::Error) -> TranslateError {
    if err.is_timeout() {
        TranslateError::Timeout
    } else {
        TranslateError::Network(err.to_string())
    }
}

#[async_trait]
impl Translator for TranslationClient {
    async fn translate(&self, request: TranslationRequest) -> Result<String, TranslateError> {
        let url = self.config.translate_url();
        let body = TranslateBody {
            text: &request.text,
            target_lang: request.target.code(),
            source_lang: request.source.code(),
        };

        debug!(
            "Translating {} chars from {} to {}",
            request.text.chars().count(),
            request.source,
            request.target
        );

        let response = self
            .http
            .post(&url)
            .timeout(request.timeout)
            .json(&body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(
                "Translation {} -> {} failed with status {}",
                request.source,
                request.target,
                status.as_u16()
            );
            return Err(TranslateError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(classify)?;
        let payload: TranslateResponse = serde_json::from_slice(&bytes)
            .map_err(|e| TranslateError::Malformed(e.to_string()))?;

        payload
            .translated_text
            .ok_or_else(|| TranslateError::Malformed("missing translated_text".to_string()))
    }
}
