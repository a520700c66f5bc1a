use super::model::{Metadata, MetadataReply};
use crate::common::validation::non_blank;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    #[validate(custom(function = "non_blank"))]
    pub openai_key: String,
    #[serde(default)]
    #[validate(custom(function = "non_blank"))]
    pub prompt: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MetadataResponse {
    #[serde(flatten)]
    pub metadata: Metadata,
    /// True when the model reply was not valid JSON and was wrapped as-is.
    pub degraded: bool,
}

impl From<MetadataReply> for MetadataResponse {
    fn from(reply: MetadataReply) -> Self {
        let degraded = reply.is_degraded();
        Self {
            metadata: reply.into_metadata(),
            degraded,
        }
    }
}
