use super::dto::{GenerateRequest, MetadataResponse};
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// Generate title, description and tags from a prompt
#[utoipa::path(
    post,
    path = "/api/v1/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Metadata generated", body = ApiResponse<MetadataResponse>),
        (status = 400, description = "Missing OpenAI key or prompt"),
        (status = 502, description = "Text generation failed")
    ),
    tag = "Metadata"
)]
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> impl IntoResponse {
    match state.metadata.generate(payload).await {
        Ok(reply) => ApiSuccess(
            ApiResponse::success(MetadataResponse::from(reply), "Metadata generated successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
