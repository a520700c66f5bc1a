use crate::common::validation::{http_url, non_blank};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    /// YouTube Data API key
    #[serde(default)]
    #[validate(custom(function = "non_blank"))]
    pub api_key: String,
    #[serde(default)]
    #[validate(custom(function = "http_url"))]
    pub video_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub video_id: String,
    /// Watch page of the (private) upload
    pub video_url: String,
}
