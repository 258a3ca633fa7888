use thiserror::Error;

use crate::llm_client::LlmError;

/// Every way a generation call can fail after the request was validated.
/// None of these are retried; the caller resubmits.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("LLM call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("LLM returned no content")]
    EmptyResponse,

    #[error("Invalid response format in suggestion {block}: {reason}")]
    Format { block: usize, reason: String },

    #[error("Expected exactly {expected} suggestions, parsed {actual}")]
    CountMismatch { expected: usize, actual: usize },
}

impl GenerationError {
    /// Stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::Llm(_) => "transport",
            GenerationError::EmptyResponse => "empty_response",
            GenerationError::Format { .. } => "format",
            GenerationError::CountMismatch { .. } => "count_mismatch",
        }
    }
}
