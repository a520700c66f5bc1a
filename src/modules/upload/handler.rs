use super::dto::{UploadRequest, UploadResponse};
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// Upload a remote video to YouTube as a private video
#[utoipa::path(
    post,
    path = "/api/v1/upload",
    request_body = UploadRequest,
    responses(
        (status = 200, description = "Video uploaded (set to private)", body = ApiResponse<UploadResponse>),
        (status = 400, description = "Missing API key or video URL"),
        (status = 502, description = "Fetch or YouTube ingest failed; details carry the OAuth note")
    ),
    tag = "Upload"
)]
pub async fn upload_video(
    State(state): State<AppState>,
    Json(payload): Json<UploadRequest>,
) -> impl IntoResponse {
    match state.uploads.upload(payload).await {
        Ok(res) => ApiSuccess(
            ApiResponse::success(res, "Video uploaded successfully (set to private)"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
