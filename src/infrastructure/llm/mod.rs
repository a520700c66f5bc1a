use async_trait::async_trait;
use thiserror::Error;

pub mod openai;

pub use openai::OpenAiClient;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },
}

/// A single-shot text completion backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the first choice's text, or `None` when the upstream replied
    /// without content.
    async fn complete(
        &self,
        api_key: &str,
        system: &str,
        prompt: &str,
    ) -> Result<Option<String>, LlmError>;
}
