use crate::config::env::{self, EnvKey};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4";
pub const DEFAULT_YOUTUBE_UPLOAD_URL: &str = "https://www.googleapis.com/upload/youtube/v3/videos";
pub const DEFAULT_YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not a valid URL: {source}")]
    InvalidUrl {
        key: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{key} must be between 0.0 and 2.0, got {value}")]
    InvalidTemperature { key: &'static str, value: f32 },
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub openai_base_url: String,
    pub openai_model: String,
    pub openai_temperature: f32,
    pub youtube_upload_url: String,
    pub youtube_watch_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 3000,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            openai_temperature: 0.7,
            youtube_upload_url: DEFAULT_YOUTUBE_UPLOAD_URL.to_string(),
            youtube_watch_url: DEFAULT_YOUTUBE_WATCH_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the environment, falling back to the public endpoints for
    /// anything unset. Credentials are never configured here; callers send
    /// their own keys with each request.
    pub fn new() -> Result<Self, ConfigError> {
        let config = Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            openai_base_url: env::get_or(EnvKey::OpenAiBaseUrl, DEFAULT_OPENAI_BASE_URL),
            openai_model: env::get_or(EnvKey::OpenAiModel, DEFAULT_OPENAI_MODEL),
            openai_temperature: env::get_parsed(EnvKey::OpenAiTemperature, 0.7),
            youtube_upload_url: env::get_or(EnvKey::YoutubeUploadUrl, DEFAULT_YOUTUBE_UPLOAD_URL),
            youtube_watch_url: env::get_or(EnvKey::YoutubeWatchUrl, DEFAULT_YOUTUBE_WATCH_URL),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            (EnvKey::OpenAiBaseUrl, &self.openai_base_url),
            (EnvKey::YoutubeUploadUrl, &self.youtube_upload_url),
            (EnvKey::YoutubeWatchUrl, &self.youtube_watch_url),
        ] {
            Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
                key: key.as_str(),
                source,
            })?;
        }

        if !(0.0..=2.0).contains(&self.openai_temperature) {
            return Err(ConfigError::InvalidTemperature {
                key: EnvKey::OpenAiTemperature.as_str(),
                value: self.openai_temperature,
            });
        }

        Ok(())
    }
}
