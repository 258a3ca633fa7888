use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::generation::models::Suggestion;

/// A saved suggestion. Serialized flat: `{ name, description, score, keywords, savedAt }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    #[serde(flatten)]
    pub suggestion: Suggestion,
    #[serde(rename = "savedAt")]
    pub saved_at: DateTime<Utc>,
}

impl FavoriteEntry {
    /// Create a new favorite stamped with the current time
    pub fn new(suggestion: Suggestion) -> Self {
        Self {
            suggestion,
            saved_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.suggestion.name
    }

    /// Favorites are identified by name alone.
    pub fn has_name(&self, name: &str) -> bool {
        self.suggestion.name == name
    }
}
