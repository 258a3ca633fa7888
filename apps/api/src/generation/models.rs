use serde::{Deserialize, Serialize};

use crate::generation::reply_parser::KEYWORD_COUNT;

/// Shortest topic accepted, in characters.
pub const MIN_TOPIC_CHARS: usize = 2;

/// Request body for name generation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub tone: String,
    pub industry: String,
}

impl GenerationRequest {
    /// Returns one message per invalid field, empty when the request is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.topic.chars().count() < MIN_TOPIC_CHARS {
            issues.push(format!(
                "topic: must be at least {MIN_TOPIC_CHARS} characters"
            ));
        }
        issues
    }
}

/// One parsed newsletter-name candidate.
///
/// Only ever built whole by the reply parser: a name, a description, a score
/// in (0, 1] and exactly three keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub description: String,
    pub score: f64,
    pub keywords: Vec<String>,
}

impl Suggestion {
    /// Checks the same shape the reply parser enforces. Used where suggestions
    /// arrive from clients instead of from the parser.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.name.trim().is_empty() {
            issues.push("name: must not be empty".to_string());
        }
        if self.description.trim().is_empty() {
            issues.push("description: must not be empty".to_string());
        }
        if !is_valid_score(self.score) {
            issues.push("score: must be a decimal in (0, 1]".to_string());
        }
        if self.keywords.len() != KEYWORD_COUNT || self.keywords.iter().any(|k| k.trim().is_empty()) {
            issues.push(format!(
                "keywords: must contain exactly {KEYWORD_COUNT} non-empty terms"
            ));
        }
        issues
    }
}

/// Scores live in (0, 1].
pub fn is_valid_score(score: f64) -> bool {
    score.is_finite() && score > 0.0 && score <= 1.0
}
