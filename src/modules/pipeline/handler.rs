use super::dto::{PipelineRequest, PipelineResponse};
use super::service::PipelineService;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// Generate metadata and upload or schedule in one call
#[utoipa::path(
    post,
    path = "/api/v1/pipeline",
    request_body = PipelineRequest,
    responses(
        (status = 200, description = "Metadata generated and video uploaded or scheduled", body = ApiResponse<PipelineResponse>),
        (status = 400, description = "Missing or invalid fields"),
        (status = 502, description = "Generation or upload failed")
    ),
    tag = "Pipeline"
)]
pub async fn run_pipeline(
    State(state): State<AppState>,
    Json(payload): Json<PipelineRequest>,
) -> impl IntoResponse {
    match PipelineService::run(state, payload).await {
        Ok(res) => ApiSuccess(
            ApiResponse::success(res, "Pipeline completed successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
