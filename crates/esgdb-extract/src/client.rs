//! HTTP client for the chat-completions reasoning service.
//!
//! Wraps `reqwest` with bearer auth, a fixed low sampling temperature, and
//! typed request/response bodies. The base URL is overridable so tests can
//! point the client at a mock server.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Near-deterministic sampling, so re-running extraction over the same
/// content yields stable output.
const TEMPERATURE: f32 = 0.1;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for a chat-completions style reasoning service.
///
/// Use [`ReasoningClient::new`] for production or
/// [`ReasoningClient::with_base_url`] to point at a mock server in tests.
pub struct ReasoningClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl ReasoningClient {
    /// Creates a client pointed at the production service.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, ExtractError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("esgdb/0.1 (esg-data-collection)")
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Submits one instruction prompt and returns the completion text of the
    /// first choice.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::Http`] on network failure or non-2xx HTTP status.
    /// - [`ExtractError::Deserialize`] if the envelope is not valid JSON of
    ///   the expected shape.
    /// - [`ExtractError::EmptyResponse`] if the service returns no choices or
    ///   a choice without content.
    pub async fn complete(&self, prompt: &str) -> Result<String, ExtractError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let raw = response.text().await?;
        let envelope: ChatResponse =
            serde_json::from_str(&raw).map_err(|e| ExtractError::Deserialize {
                context: "chat completion envelope".to_string(),
                source: e,
            })?;

        envelope
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ExtractError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = ReasoningClient::with_base_url("k", "gpt-4o", 5, "http://localhost:9/")
            .expect("client construction should not fail");
        assert_eq!(client.base_url, "http://localhost:9");
    }

    #[test]
    fn request_body_shape_matches_wire_format() {
        let body = ChatRequest {
            model: "gpt-4o",
            messages: [ChatMessage {
                role: "user",
                content: "hello",
            }],
            temperature: TEMPERATURE,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
    }
}
