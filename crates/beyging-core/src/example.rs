//! Evaluation example records (one JSONL line each).

use serde::{Deserialize, Serialize};

use crate::inflect::InflectionTable;
use crate::settings::{PromptSettings, PHRASE_PLACEHOLDER};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: String,
    pub content: String,
}

/// A two-turn prompt and the ideal answer: the serialized inflection table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub input: Vec<Turn>,
    pub ideal: String,
}

impl Example {
    /// Build the example for the nominative singular `phrase`.
    pub fn new(
        prompt: &PromptSettings,
        phrase: &str,
        table: &InflectionTable,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            input: vec![
                Turn {
                    role: "system".to_string(),
                    content: prompt.system.clone(),
                },
                Turn {
                    role: "user".to_string(),
                    content: prompt.user_template.replace(PHRASE_PLACEHOLDER, phrase),
                },
            ],
            ideal: serde_json::to_string(table)?,
        })
    }

    /// Compact JSON without a trailing newline. Non-ASCII text is kept as is.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
