use super::dto::ScheduleRequest;
use super::model::{Job, NewJob};
use super::repository::JobRegistry;
use crate::common::error::{AppError, AppResult};
use crate::common::validation;
use crate::modules::metadata::model::Metadata;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};
use tracing::info;
use validator::Validate;

pub const VOLATILE_STORAGE_NOTE: &str =
    "No jobs found. Jobs are stored in memory and cleared on restart.";

#[derive(Debug)]
pub struct JobListing {
    pub jobs: Vec<Job>,
    pub note: Option<&'static str>,
}

/// Records future uploads. Recording is all it does: no timer or worker ever
/// picks a job up.
#[derive(Clone)]
pub struct ScheduleService {
    registry: JobRegistry,
}

impl ScheduleService {
    pub fn new(registry: JobRegistry) -> Self {
        Self { registry }
    }

    pub async fn submit(&self, req: ScheduleRequest) -> AppResult<Job> {
        req.validate()
            .map_err(|e| AppError::scheduling_invalid(validation::describe(&e)))?;

        let schedule_time = parse_schedule_time(&req.schedule_time)?;

        let job = self
            .registry
            .append(NewJob {
                credential: req.api_key,
                video_url: req.video_url,
                metadata: Metadata::with_defaults(req.title, req.description, req.tags),
                schedule_time,
            })
            .await;

        info!(job_id = %job.id, schedule_time = %job.schedule_time, "Job scheduled");
        Ok(job)
    }

    pub async fn list(&self) -> JobListing {
        let jobs = self.registry.find_all().await;
        let note = jobs.is_empty().then_some(VOLATILE_STORAGE_NOTE);
        JobListing { jobs, note }
    }
}

/// Accepts RFC 3339 timestamps, plus the offset-less form HTML
/// `datetime-local` inputs produce, which is taken as UTC.
pub fn parse_schedule_time(raw: &str) -> AppResult<OffsetDateTime> {
    let raw = raw.trim();

    if let Ok(at) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(at);
    }

    let with_seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let without_seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]");

    PrimitiveDateTime::parse(raw, &with_seconds)
        .or_else(|_| PrimitiveDateTime::parse(raw, &without_seconds))
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|_| AppError::scheduling_invalid(format!("Invalid schedule time: {}", raw)))
}
