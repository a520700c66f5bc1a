use super::dto::{UploadRequest, UploadResponse};
use crate::common::error::{AppError, AppResult};
use crate::common::validation;
use crate::infrastructure::fetch::VideoFetcher;
use crate::infrastructure::youtube::{VideoHost, VideoResource, YouTubeError};
use crate::modules::metadata::model::Metadata;
use std::sync::Arc;
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct UploadService {
    fetcher: Arc<dyn VideoFetcher>,
    host: Arc<dyn VideoHost>,
    watch_url: String,
}

impl UploadService {
    pub fn new(fetcher: Arc<dyn VideoFetcher>, host: Arc<dyn VideoHost>, watch_url: &str) -> Self {
        Self {
            fetcher,
            host,
            watch_url: watch_url.to_string(),
        }
    }

    /// Streams the source video into a new private YouTube video.
    pub async fn upload(&self, req: UploadRequest) -> AppResult<UploadResponse> {
        req.validate()
            .map_err(|e| AppError::invalid_input(validation::describe(&e)))?;

        let metadata = Metadata::with_defaults(req.title, req.description, req.tags);
        let resource = VideoResource::private(metadata.title, metadata.description, metadata.tags);

        let mut media = self.fetcher.fetch(req.video_url.trim()).await.map_err(|e| {
            error!("Source fetch failed: {}", e);
            AppError::upload_failed(e.to_string())
        })?;

        // The ingest endpoint only takes video/* or octet-stream.
        if !media.content_type.starts_with("video/") {
            media.content_type = mime::APPLICATION_OCTET_STREAM.to_string();
        }

        let video_id = self
            .host
            .insert(&req.api_key, &resource, media)
            .await
            .map_err(|e| {
                error!("YouTube insert failed: {}", e);
                match e {
                    YouTubeError::Api { message, .. } => AppError::upload_failed(message),
                    other => AppError::upload_failed(other.to_string()),
                }
            })?;

        info!("Uploaded {} as private video {}", req.video_url, video_id);

        Ok(UploadResponse {
            video_url: format!("{}?v={}", self.watch_url, video_id),
            video_id,
        })
    }
}
