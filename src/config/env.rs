use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    OpenAiBaseUrl,
    OpenAiModel,
    OpenAiTemperature,
    YoutubeUploadUrl,
    YoutubeWatchUrl,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::OpenAiBaseUrl => "OPENAI_BASE_URL",
            EnvKey::OpenAiModel => "OPENAI_MODEL",
            EnvKey::OpenAiTemperature => "OPENAI_TEMPERATURE",
            EnvKey::YoutubeUploadUrl => "YOUTUBE_UPLOAD_URL",
            EnvKey::YoutubeWatchUrl => "YOUTUBE_WATCH_URL",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
