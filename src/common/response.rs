use crate::common::error::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T, message: &str) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
            details: None,
            data: Some(data),
        }
    }

    pub fn error(message: &str, details: Option<&str>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.to_string(),
            details: details.map(str::to_string),
            data: None,
        }
    }
}

pub struct ApiSuccess<T>(pub T, pub StatusCode);

impl<T> IntoResponse for ApiSuccess<ApiResponse<T>>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let (response, status) = (self.0, self.1);
        (status, Json(response)).into_response()
    }
}

pub struct ApiError {
    pub message: String,
    pub details: Option<String>,
    pub status: StatusCode,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self {
            message: err.to_string(),
            details: err.details().map(str::to_string),
            status: err.status_code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let response = ApiResponse::<()>::error(&self.message, self.details.as_deref());
        (self.status, Json(response)).into_response()
    }
}
