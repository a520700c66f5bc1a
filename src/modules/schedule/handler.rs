use super::dto::{JobListResponse, JobResponse, ScheduleRequest};
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// Record a video upload for a future time
///
/// The job is stored in memory only and is never executed by this service.
#[utoipa::path(
    post,
    path = "/api/v1/schedule",
    request_body = ScheduleRequest,
    responses(
        (status = 201, description = "Job scheduled", body = ApiResponse<JobResponse>),
        (status = 400, description = "Missing API key, video URL or schedule time")
    ),
    tag = "Schedule"
)]
pub async fn schedule_job(
    State(state): State<AppState>,
    Json(payload): Json<ScheduleRequest>,
) -> impl IntoResponse {
    match state.schedule.submit(payload).await {
        Ok(job) => ApiSuccess(
            ApiResponse::success(JobResponse::from(job), "Job scheduled successfully"),
            StatusCode::CREATED,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// List scheduled jobs in submission order
#[utoipa::path(
    get,
    path = "/api/v1/jobs",
    responses(
        (status = 200, description = "Scheduled jobs", body = ApiResponse<JobListResponse>)
    ),
    tag = "Schedule"
)]
pub async fn list_jobs(State(state): State<AppState>) -> impl IntoResponse {
    let listing = state.schedule.list().await;
    let message = listing.note.unwrap_or("Jobs retrieved successfully");

    let response = JobListResponse {
        jobs: listing.jobs.into_iter().map(JobResponse::from).collect(),
        note: listing.note.map(str::to_string),
    };

    ApiSuccess(ApiResponse::success(response, message), StatusCode::OK)
}
