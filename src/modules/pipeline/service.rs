use super::dto::{PipelineOutcome, PipelineRequest, PipelineResponse};
use crate::common::error::{AppError, AppResult};
use crate::common::validation;
use crate::modules::metadata::dto::GenerateRequest;
use crate::modules::schedule::dto::{JobResponse, ScheduleRequest};
use crate::modules::schedule::service::parse_schedule_time;
use crate::modules::upload::dto::UploadRequest;
use crate::state::AppState;
use tracing::info;
use validator::Validate;

pub struct PipelineService;

impl PipelineService {
    /// Generate metadata, then upload now or record the upload for later.
    ///
    /// Everything the later stages need is checked before the generation
    /// call, so a bad request never spends a completion.
    pub async fn run(state: AppState, req: PipelineRequest) -> AppResult<PipelineResponse> {
        req.validate()
            .map_err(|e| AppError::invalid_input(validation::describe(&e)))?;

        let schedule_time = req
            .schedule_time
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());
        if let Some(raw) = schedule_time {
            parse_schedule_time(raw)?;
        }

        let reply = state
            .metadata
            .generate(GenerateRequest {
                openai_key: req.openai_key,
                prompt: req.prompt,
            })
            .await?;
        let degraded = reply.is_degraded();
        let metadata = reply.into_metadata();

        let outcome = match schedule_time {
            Some(raw) => {
                let job = state
                    .schedule
                    .submit(ScheduleRequest {
                        api_key: req.api_key,
                        video_url: req.video_url,
                        title: Some(metadata.title.clone()),
                        description: Some(metadata.description.clone()),
                        tags: Some(metadata.tags.clone()),
                        schedule_time: raw.to_string(),
                    })
                    .await?;
                info!(job_id = %job.id, "Pipeline recorded a scheduled upload");
                PipelineOutcome::Scheduled(JobResponse::from(job))
            }
            None => {
                let uploaded = state
                    .uploads
                    .upload(UploadRequest {
                        api_key: req.api_key,
                        video_url: req.video_url,
                        title: Some(metadata.title.clone()),
                        description: Some(metadata.description.clone()),
                        tags: Some(metadata.tags.clone()),
                    })
                    .await?;
                info!(video_id = %uploaded.video_id, "Pipeline uploaded video");
                PipelineOutcome::Uploaded(uploaded)
            }
        };

        Ok(PipelineResponse {
            metadata,
            degraded,
            outcome,
        })
    }
}
