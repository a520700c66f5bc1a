use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const TITLE_MAX_CHARS: usize = 100;
pub const FALLBACK_TAGS: [&str; 2] = ["AI Generated", "Video"];

pub const DEFAULT_TITLE: &str = "AI Generated Video";
pub const DEFAULT_DESCRIPTION: &str = "Uploaded by AI Agent";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl Metadata {
    /// Fills absent fields with the placeholders used for uploads. Supplied
    /// values are kept verbatim, blank ones included.
    pub fn with_defaults(
        title: Option<String>,
        description: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Self {
        Self {
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            tags: tags.unwrap_or_default(),
        }
    }
}

/// Outcome of reading a model reply: either it matched the expected JSON
/// shape or it was wrapped into a fallback record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataReply {
    Parsed(Metadata),
    Degraded(Metadata),
}

impl MetadataReply {
    /// Never fails. Callers must pass a non-blank reply.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Metadata>(strip_code_fence(raw)) {
            Ok(metadata)
                if !metadata.title.trim().is_empty() && !metadata.description.trim().is_empty() =>
            {
                MetadataReply::Parsed(metadata)
            }
            _ => MetadataReply::Degraded(Metadata {
                title: raw.chars().take(TITLE_MAX_CHARS).collect(),
                description: raw.to_string(),
                tags: FALLBACK_TAGS.iter().map(|t| t.to_string()).collect(),
            }),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, MetadataReply::Degraded(_))
    }

    pub fn metadata(&self) -> &Metadata {
        match self {
            MetadataReply::Parsed(m) | MetadataReply::Degraded(m) => m,
        }
    }

    pub fn into_metadata(self) -> Metadata {
        match self {
            MetadataReply::Parsed(m) | MetadataReply::Degraded(m) => m,
        }
    }
}

// Chat models often answer with ```json ... ``` even when asked for bare JSON.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening line.
    match body.split_once('\n') {
        Some((_, inner)) => inner.trim(),
        None => body.trim(),
    }
}
