use super::model::{Job, JobStatus};
use crate::common::validation::{http_url, non_blank};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    #[serde(default)]
    #[validate(custom(function = "non_blank"))]
    pub api_key: String,
    #[serde(default)]
    #[validate(custom(function = "http_url"))]
    pub video_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    /// RFC 3339, or `YYYY-MM-DDTHH:MM[:SS]` read as UTC
    #[serde(default)]
    #[validate(custom(function = "non_blank"))]
    pub schedule_time: String,
}

/// A job as shown to API callers. The credential is never echoed back.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: String,
    pub video_url: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub schedule_time: OffsetDateTime,
    pub status: JobStatus,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            video_url: job.video_url,
            title: job.metadata.title,
            description: job.metadata.description,
            tags: job.metadata.tags,
            schedule_time: job.schedule_time,
            status: job.status,
            created_at: job.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct JobListResponse {
    pub jobs: Vec<JobResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
