use crate::infrastructure::fetch::FetchedVideo;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub mod client;

pub use client::YouTubeClient;

/// "People & Blogs".
pub const CATEGORY_PEOPLE_AND_BLOGS: &str = "22";

#[derive(Debug, Error)]
pub enum YouTubeError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Upload session was not created: missing Location header")]
    MissingSession,
}

/// Visibility of newly inserted videos. Only `Private` exists so callers
/// cannot publish an upload by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivacyStatus {
    Private,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatus {
    pub privacy_status: PrivacyStatus,
}

/// The `videos` resource sent with an insert.
#[derive(Debug, Clone, Serialize)]
pub struct VideoResource {
    pub snippet: Snippet,
    pub status: VideoStatus,
}

impl VideoResource {
    pub fn private(title: String, description: String, tags: Vec<String>) -> Self {
        Self {
            snippet: Snippet {
                title,
                description,
                tags,
                category_id: CATEGORY_PEOPLE_AND_BLOGS.to_string(),
            },
            status: VideoStatus {
                privacy_status: PrivacyStatus::Private,
            },
        }
    }
}

#[async_trait]
pub trait VideoHost: Send + Sync {
    /// Creates the video and returns the platform-assigned id.
    async fn insert(
        &self,
        api_key: &str,
        resource: &VideoResource,
        media: FetchedVideo,
    ) -> Result<String, YouTubeError>;
}
