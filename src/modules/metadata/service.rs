use super::dto::GenerateRequest;
use super::model::MetadataReply;
use crate::common::error::{AppError, AppResult};
use crate::common::validation;
use crate::infrastructure::llm::{LlmError, TextGenerator};
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

pub const SYSTEM_PROMPT: &str = "You are a YouTube video metadata expert. Generate compelling titles, \
descriptions, and tags for videos. Return your response as a JSON object with fields: title, \
description, and tags (array of strings).";

#[derive(Clone)]
pub struct MetadataService {
    generator: Arc<dyn TextGenerator>,
}

impl MetadataService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn generate(&self, req: GenerateRequest) -> AppResult<MetadataReply> {
        req.validate()
            .map_err(|e| AppError::invalid_input(validation::describe(&e)))?;

        let content = self
            .generator
            .complete(&req.openai_key, SYSTEM_PROMPT, &req.prompt)
            .await
            .map_err(|e| {
                warn!("Metadata generation failed: {}", e);
                match e {
                    LlmError::Api { message, .. } => AppError::generation_failed(message),
                    other => AppError::generation_failed(other.to_string()),
                }
            })?;

        let content = content
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| AppError::generation_failed("No content generated"))?;

        let reply = MetadataReply::parse(&content);
        if reply.is_degraded() {
            info!("Model reply was not valid metadata JSON, using fallback record");
        }

        Ok(reply)
    }
}
