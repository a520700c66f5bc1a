use crate::modules::metadata::model::Metadata;
use serde::Serialize;
use time::OffsetDateTime;
use utoipa::ToSchema;

/// Jobs are recorded only; nothing in this service ever moves one past
/// `Scheduled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Scheduled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: String,
    pub credential: String,
    pub video_url: String,
    pub metadata: Metadata,
    pub schedule_time: OffsetDateTime,
    pub status: JobStatus,
    pub created_at: OffsetDateTime,
}

/// Caller-supplied part of a job; id, status and creation time are assigned
/// by the registry.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub credential: String,
    pub video_url: String,
    pub metadata: Metadata,
    pub schedule_time: OffsetDateTime,
}
