//! Completion request parameters and response cleanup.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Generation parameters sent with every completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionParams {
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
}

impl CompletionParams {
    pub const DEFAULT_MODEL: &'static str = "gpt-3.5-turbo-instruct";
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
    pub const DEFAULT_MAX_TOKENS: u32 = 256;

    pub fn new(model: impl Into<String>, temperature: f32, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            temperature,
            max_tokens,
        }
    }

    /// Check the parameters are usable for a request.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.model.trim().is_empty() {
            return Err(DomainError::InvalidSetting(
                "model name cannot be empty".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(DomainError::InvalidSetting(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(DomainError::InvalidSetting(
                "max_tokens must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MODEL,
            Self::DEFAULT_TEMPERATURE,
            Self::DEFAULT_MAX_TOKENS,
        )
    }
}

/// Clean raw completion text into a single-line phrase.
///
/// Trims surrounding whitespace, then drops every newline and double quote,
/// since results are embedded inside further quoted prompts.
pub fn sanitize_completion(raw: &str) -> String {
    raw.trim().replace(['\n', '"'], "")
}
