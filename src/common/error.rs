use axum::http::StatusCode;
use thiserror::Error;

/// Appended to every upload failure. Simple API keys cannot carry the
/// `youtube.upload` scope, which is the usual reason the ingest call is refused.
pub const OAUTH_ADVISORY: &str = "Note: the YouTube Data API requires OAuth 2.0 for uploads. \
An API key alone lacks the upload scope; production use needs an OAuth 2.0 authorization flow.";

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    GenerationFailed(String),

    #[error("{message}")]
    UploadFailed {
        message: String,
        details: &'static str,
    },

    #[error("{0}")]
    SchedulingInvalid(String),
}

impl AppError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn generation_failed(msg: impl Into<String>) -> Self {
        Self::GenerationFailed(msg.into())
    }

    pub fn upload_failed(msg: impl Into<String>) -> Self {
        Self::UploadFailed {
            message: msg.into(),
            details: OAUTH_ADVISORY,
        }
    }

    pub fn scheduling_invalid(msg: impl Into<String>) -> Self {
        Self::SchedulingInvalid(msg.into())
    }

    /// True for both flavours of rejected caller input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::SchedulingInvalid(_))
    }

    pub fn details(&self) -> Option<&'static str> {
        match self {
            Self::UploadFailed { details, .. } => Some(details),
            _ => None,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::SchedulingInvalid(_) => StatusCode::BAD_REQUEST,
            Self::GenerationFailed(_) | Self::UploadFailed { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}
