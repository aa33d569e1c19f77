//! Chat completions HTTP client.
//!
//! Talks to `/v1/chat/completions` on an OpenAI-compatible endpoint
//! with bearer auth. The reply's first choice is the raw analysis text;
//! a reply without content maps to the `"{}"` marker so the normalizer
//! downstream always has something to chew on.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ClientError;

/// Default completion API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Default completion model.
pub const DEFAULT_MODEL: &str = "gpt-5-thinking";

/// Marker handed to the normalizer when the reply carries no content.
const EMPTY_REPLY: &str = "{}";

/// Sampling temperature for analysis requests.
const TEMPERATURE: f32 = 0.2;

/// Per-request timeout; completions with research-heavy prompts are slow.
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(120);

/// Chat completion client.
#[derive(Clone)]
pub struct ChatClient {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: ChatChoiceMessage,
}

#[derive(Deserialize, Default)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatClient {
    /// Create a client for the given endpoint, model, and API key.
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(COMPLETION_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
            client,
        }
    }

    /// Create a client from the process environment.
    ///
    /// Reads `OPENAI_API_KEY` (required), `OPENAI_MODEL`, and
    /// `OPENAI_BASE_URL` (both optional, with defaults).
    pub fn from_env() -> Result<Self, ClientError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(ClientError::MissingApiKey)?;

        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("OPENAI_MODEL")
            .unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self::new(&base_url, &model, &api_key))
    }

    /// The model this client requests completions from.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Request a completion for the given system and user prompts.
    ///
    /// Returns the reply content, or `"{}"` when the upstream replied
    /// without any.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, ClientError> {
        let request = ChatRequest {
            model: self.model.clone(),
            temperature: TEMPERATURE,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, body });
        }

        let parsed: ChatResponse = response.json().await?;
        debug!(model = %self.model, "completion received");

        Ok(extract_content(parsed))
    }
}

/// Content of the first choice, or the empty-reply marker.
fn extract_content(response: ChatResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .unwrap_or_else(|| EMPTY_REPLY.to_string())
}
