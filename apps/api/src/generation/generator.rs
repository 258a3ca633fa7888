//! Name Generation: builds the prompt, makes one LLM call, parses the reply.
//!
//! Flow: build_generation_prompt → ChatModel::complete → parse_reply.
//! There is no retry: every failure is terminal for the request.

use std::sync::Arc;

use tracing::{debug, info};

use crate::generation::error::GenerationError;
use crate::generation::models::{GenerationRequest, Suggestion};
use crate::generation::prompts::{build_generation_prompt, GENERATION_SYSTEM};
use crate::generation::reply_parser::parse_reply;
use crate::llm_client::{ChatModel, ChatRequest};

/// Sampling temperature for name generation.
pub const TEMPERATURE: f32 = 0.8;
/// Output-token ceiling for one generation reply.
pub const MAX_TOKENS: u32 = 1000;

/// Turns a validated [`GenerationRequest`] into exactly five suggestions.
#[derive(Clone)]
pub struct NameGenerator {
    model: Arc<dyn ChatModel>,
}

impl NameGenerator {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<Suggestion>, GenerationError> {
        let prompt = build_generation_prompt(&request.topic, &request.tone, &request.industry);

        let reply = self
            .model
            .complete(&ChatRequest {
                system: GENERATION_SYSTEM,
                prompt: &prompt,
                temperature: TEMPERATURE,
                max_tokens: MAX_TOKENS,
            })
            .await?
            .filter(|text| !text.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)?;

        debug!("LLM reply ({} chars):\n{reply}", reply.len());

        let suggestions = parse_reply(&reply)?;
        info!(
            "Generated {} names for topic {:?} (tone={:?}, industry={:?})",
            suggestions.len(),
            request.topic,
            request.tone,
            request.industry
        );

        Ok(suggestions)
    }
}
