//! Chat-completions client for OpenAI and API-compatible gateways.

use super::{LlmError, TextGenerator};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    model: String,
    temperature: f32,
}

impl OpenAiClient {
    pub fn new(base_url: &str, model: &str, temperature: f32) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            temperature,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn complete(
        &self,
        api_key: &str,
        system: &str,
        prompt: &str,
    ) -> Result<Option<String>, LlmError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.temperature,
            stream: false,
        };

        debug!(model = %self.model, "Requesting chat completion");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&raw)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("Completion request failed with status {}", status));
            warn!(status = status.as_u16(), "Chat completion rejected: {}", message);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: ChatResponse = response.json().await?;

        Ok(reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}
