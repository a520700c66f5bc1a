use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::metadata::handler::generate,
        crate::modules::upload::handler::upload_video,
        crate::modules::schedule::handler::schedule_job,
        crate::modules::schedule::handler::list_jobs,
        crate::modules::pipeline::handler::run_pipeline,
    ),
    components(
        schemas(
            crate::modules::metadata::model::Metadata,
            crate::modules::metadata::dto::GenerateRequest,
            crate::modules::metadata::dto::MetadataResponse,
            crate::modules::upload::dto::UploadRequest,
            crate::modules::upload::dto::UploadResponse,
            crate::modules::schedule::model::JobStatus,
            crate::modules::schedule::dto::ScheduleRequest,
            crate::modules::schedule::dto::JobResponse,
            crate::modules::schedule::dto::JobListResponse,
            crate::modules::pipeline::dto::PipelineRequest,
            crate::modules::pipeline::dto::PipelineOutcome,
            crate::modules::pipeline::dto::PipelineResponse,
        )
    ),
    tags(
        (name = "Metadata", description = "AI-generated titles, descriptions and tags"),
        (name = "Upload", description = "Immediate YouTube uploads"),
        (name = "Schedule", description = "In-memory ledger of future uploads"),
        (name = "Pipeline", description = "Generate then upload or schedule")
    )
)]
pub struct ApiDoc;
