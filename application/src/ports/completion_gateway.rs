//! Completion Gateway port
//!
//! Defines the interface for communicating with a text-completion service.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during completion requests
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Gateway for text completions
///
/// Implementations (adapters) live in the infrastructure layer. The returned
/// text is already sanitized to a single line without double quotes (see
/// [`sanitize_completion`](wikibot_domain::sanitize_completion)).
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Complete `prompt` and return the cleaned text
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
