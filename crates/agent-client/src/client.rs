//! Agent HTTP client.

use relay_core::{async_trait, Agent, AgentRequest};
use reqwest::redirect::Policy;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::{AgentConfig, HEALTH_TIMEOUT};
use crate::error::AgentError;
use crate::failure::AgentFailure;

/// Reply used when the agent answers without a `response` field.
pub const NO_RESPONSE: &str = "No response from agent";

/// Reachability of the agent service, as seen by a health probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentHealth {
    /// The docs page answered 200.
    Healthy,
    /// The docs page answered with another status.
    Unhealthy(u16),
    /// The agent could not be reached.
    Unreachable,
}

impl AgentHealth {
    /// Status string reported by the health endpoint.
    pub fn describe(&self) -> String {
        match self {
            AgentHealth::Healthy => "healthy".to_string(),
            AgentHealth::Unhealthy(status) => format!("unhealthy ({})", status),
            AgentHealth::Unreachable => "unreachable".to_string(),
        }
    }
}

/// Client for the external reasoning agent.
#[derive(Clone)]
pub struct AgentClient {
    http: Client,
    config: AgentConfig,
}

impl AgentClient {
    /// Create a new agent client.
    ///
    /// Redirects are not followed: a 3xx from the agent is reported as an
    /// unexpected status.
    pub fn new(config: AgentConfig) -> Result<Self, AgentError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .redirect(Policy::none())
            .build()
            .map_err(|e| AgentError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "AgentClient initialized with url: {}, timeout: {:?}",
            config.url, config.timeout
        );

        Ok(Self { http, config })
    }

    /// Send a request and extract the reply text.
    pub async fn call(&self, request: &AgentRequest) -> Result<String, AgentFailure> {
        debug!(
            "Sending payload to agent: {}",
            serde_json::to_string(request).unwrap_or_default()
        );

        let response = self
            .http
            .post(&self.config.url)
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| AgentFailure::from_reqwest(&e))?;

        let status = response.status();
        debug!("Received agent response - status: {}", status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                "Agent service HTTP error {}: {}",
                status.as_u16(),
                truncate(&body, 200)
            );
            return Err(AgentFailure::from_status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AgentFailure::from_reqwest(&e))?;

        let payload: Value = serde_json::from_slice(&bytes)
            .map_err(|e| AgentFailure::InvalidJson(e.to_string()))?;

        extract_reply(payload)
    }

    /// Probe the agent's docs page.
    pub async fn health(&self) -> AgentHealth {
        let url = self.config.health_url();
        match self.http.get(&url).timeout(HEALTH_TIMEOUT).send().await {
            Ok(resp) if resp.status().as_u16() == 200 => AgentHealth::Healthy,
            Ok(resp) => AgentHealth::Unhealthy(resp.status().as_u16()),
            Err(e) => {
                debug!("Agent health probe failed: {}", e);
                AgentHealth::Unreachable
            }
        }
    }
}

/// Pull the `response` field out of the agent's JSON reply.
///
/// Strings are returned verbatim, other JSON values as their JSON text, and
/// an absent or null field as [`NO_RESPONSE`].
fn extract_reply(payload: Value) -> Result<String, AgentFailure> {
    let Value::Object(mut map) = payload else {
        return Err(AgentFailure::Unexpected(
            "agent response is not a JSON object".to_string(),
        ));
    };

    match map.remove("response") {
        None | Some(Value::Null) => Ok(NO_RESPONSE.to_string()),
        Some(Value::String(text)) => Ok(text),
        Some(other) => Ok(other.to_string()),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[async_trait]
impl Agent for AgentClient {
    async fn ask(&self, request: AgentRequest) -> String {
        info!(
            chat_id = %request.chat_id,
            phone_number = %request.phone_number,
            "Calling agent service: {}",
            truncate(&request.message, 100)
        );

        match self.call(&request).await {
            Ok(reply) => {
                info!("Got agent response: {}", truncate(&reply, 100));
                reply
            }
            Err(failure) => {
                warn!(
                    phone_number = %request.phone_number,
                    url = %self.config.url,
                    "Agent call failed: {}",
                    failure
                );
                failure.user_message()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use httpmock::Method::{GET, POST};
    use httpmock::MockServer;
    use relay_core::Language;
    use serde_json::json;

    use super::*;

    fn request() -> AgentRequest {
        AgentRequest {
            chat_id: "c1".to_string(),
            phone_number: "+1555".to_string(),
            message: "When should I sow cotton?".to_string(),
            language: Language::English,
        }
    }

    fn client_for(server: &MockServer) -> AgentClient {
        AgentClient::new(AgentConfig::new(server.url("/chat"))).unwrap()
    }

    async fn ask_with_status(status: u16) -> String {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/chat");
            then.status(status).body("error body");
        });
        client_for(&server).ask(request()).await
    }

    #[tokio::test]
    async fn test_ask_returns_response_field() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/chat")
                .header("accept", "application/json")
                .header("content-type", "application/json")
                .json_body(json!({
                    "chatId": "c1",
                    "phone_number": "+1555",
                    "message": "When should I sow cotton?",
                    "language": "en"
                }));
            then.status(200)
                .json_body(json!({"response": "Sow after the first monsoon rains."}));
        });

        let reply = client_for(&server).ask(request()).await;

        mock.assert();
        assert_eq!(reply, "Sow after the first monsoon rains.");
    }

    #[tokio::test]
    async fn test_ask_missing_response_field() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/chat");
            then.status(200).json_body(json!({"answer": "elsewhere"}));
        });

        assert_eq!(client_for(&server).ask(request()).await, NO_RESPONSE);
    }

    #[tokio::test]
    async fn test_ask_null_response_field() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/chat");
            then.status(200).json_body(json!({"response": null}));
        });

        assert_eq!(client_for(&server).ask(request()).await, NO_RESPONSE);
    }

    #[tokio::test]
    async fn test_ask_non_string_response_field() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/chat");
            then.status(200).json_body(json!({"response": 42}));
        });

        assert_eq!(client_for(&server).ask(request()).await, "42");
    }

    #[tokio::test]
    async fn test_ask_405() {
        let reply = ask_with_status(405).await;
        assert!(reply.contains("currently unavailable"));
    }

    #[tokio::test]
    async fn test_ask_422() {
        let reply = ask_with_status(422).await;
        assert!(reply.contains("issue with your request format"));
    }

    #[tokio::test]
    async fn test_ask_5xx() {
        assert!(ask_with_status(500).await.contains("technical difficulties"));
        assert!(ask_with_status(503).await.contains("technical difficulties"));
    }

    #[tokio::test]
    async fn test_ask_other_4xx() {
        let reply = ask_with_status(404).await;
        assert!(reply.contains("unable to process your request"));
    }

    #[tokio::test]
    async fn test_ask_redirect_not_followed() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/chat");
            then.status(302).header("location", "/elsewhere");
        });

        assert_eq!(client_for(&server).ask(request()).await, "Agent error: 302");
    }

    #[tokio::test]
    async fn test_ask_invalid_json() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/chat");
            then.status(200).body("<html>oops</html>");
        });

        let reply = client_for(&server).ask(request()).await;
        assert!(reply.contains("invalid response"));
    }

    #[tokio::test]
    async fn test_ask_json_not_object() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/chat");
            then.status(200).json_body(json!(["a", "b"]));
        });

        let reply = client_for(&server).ask(request()).await;
        assert_eq!(reply, "Sorry, something went wrong. Please try again later.");
    }

    #[tokio::test]
    async fn test_ask_timeout() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/chat");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!({"response": "late"}));
        });

        let config = AgentConfig::new(server.url("/chat")).with_timeout(Duration::from_millis(50));
        let reply = AgentClient::new(config).unwrap().ask(request()).await;
        assert!(reply.contains("taking longer than expected"));
    }

    #[tokio::test]
    async fn test_ask_connection_refused() {
        let client = AgentClient::new(AgentConfig::new("http://127.0.0.1:1/chat")).unwrap();
        let reply = client.ask(request()).await;
        assert!(reply.contains("currently offline"));
    }

    #[tokio::test]
    async fn test_call_reports_failure_kind() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/chat");
            then.status(500);
        });

        let result = client_for(&server).call(&request()).await;
        assert_eq!(result, Err(AgentFailure::ServerError(500)));
    }

    #[tokio::test]
    async fn test_health_probe() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/docs");
            then.status(200).body("docs");
        });

        assert_eq!(client_for(&server).health().await, AgentHealth::Healthy);
    }

    #[tokio::test]
    async fn test_health_probe_unhealthy() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/docs");
            then.status(503);
        });

        let health = client_for(&server).health().await;
        assert_eq!(health, AgentHealth::Unhealthy(503));
        assert_eq!(health.describe(), "unhealthy (503)");
    }

    #[tokio::test]
    async fn test_health_probe_unreachable() {
        let client = AgentClient::new(AgentConfig::new("http://127.0.0.1:1/chat")).unwrap();
        assert_eq!(client.health().await, AgentHealth::Unreachable);
    }
}
