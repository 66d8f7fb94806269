//! Completion configuration from TOML (`[completion]` section)

use serde::{Deserialize, Serialize};
use wikibot_domain::CompletionParams;

/// Raw completion parameters from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCompletionConfig {
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
}

impl Default for FileCompletionConfig {
    fn default() -> Self {
        let params = CompletionParams::default();
        Self {
            model: params.model,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        }
    }
}

impl FileCompletionConfig {
    pub fn to_params(&self) -> CompletionParams {
        CompletionParams::new(self.model.clone(), self.temperature, self.max_tokens)
    }
}
