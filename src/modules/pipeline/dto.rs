use crate::common::validation::{http_url, non_blank};
use crate::modules::metadata::model::Metadata;
use crate::modules::schedule::dto::JobResponse;
use crate::modules::upload::dto::UploadResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRequest {
    #[serde(default)]
    #[validate(custom(function = "non_blank"))]
    pub openai_key: String,
    #[serde(default)]
    #[validate(custom(function = "non_blank"))]
    pub prompt: String,
    /// YouTube Data API key
    #[serde(default)]
    #[validate(custom(function = "non_blank"))]
    pub api_key: String,
    #[serde(default)]
    #[validate(custom(function = "http_url"))]
    pub video_url: String,
    /// When present the upload is recorded for later instead of run now
    pub schedule_time: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(tag = "stage", rename_all = "lowercase")]
pub enum PipelineOutcome {
    Uploaded(UploadResponse),
    Scheduled(JobResponse),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PipelineResponse {
    pub metadata: Metadata,
    pub degraded: bool,
    pub outcome: PipelineOutcome,
}
