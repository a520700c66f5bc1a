use crate::config::settings::AppConfig;
use crate::infrastructure::fetch::{HttpVideoFetcher, VideoFetcher};
use crate::infrastructure::llm::{OpenAiClient, TextGenerator};
use crate::infrastructure::youtube::{VideoHost, YouTubeClient};
use crate::modules::metadata::service::MetadataService;
use crate::modules::schedule::repository::JobRegistry;
use crate::modules::schedule::service::ScheduleService;
use crate::modules::upload::service::UploadService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub metadata: MetadataService,
    pub uploads: UploadService,
    pub schedule: ScheduleService,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        generator: Arc<dyn TextGenerator>,
        fetcher: Arc<dyn VideoFetcher>,
        host: Arc<dyn VideoHost>,
        registry: JobRegistry,
    ) -> Self {
        let uploads = UploadService::new(fetcher, host, &config.youtube_watch_url);
        Self {
            metadata: MetadataService::new(generator),
            uploads,
            schedule: ScheduleService::new(registry),
            config,
        }
    }

    /// Wires the real OpenAI and YouTube clients and an empty job registry.
    pub fn from_config(config: AppConfig) -> Result<Self, reqwest::Error> {
        let generator = OpenAiClient::new(
            &config.openai_base_url,
            &config.openai_model,
            config.openai_temperature,
        )?;
        let fetcher = HttpVideoFetcher::new()?;
        let host = YouTubeClient::new(&config.youtube_upload_url)?;

        Ok(Self::new(
            config,
            Arc::new(generator),
            Arc::new(fetcher),
            Arc::new(host),
            JobRegistry::new(),
        ))
    }
}
