//! OpenAI Completion Gateway implementation

use super::types::{CompletionRequest, CompletionResponse, ErrorEnvelope};
use crate::config::FileOpenAiConfig;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};
use wikibot_application::{CompletionError, CompletionGateway};
use wikibot_domain::{CompletionParams, sanitize_completion};

const COMPLETIONS_PATH: &str = "/v1/completions";

/// Completion gateway backed by the OpenAI completions API
pub struct OpenAiCompletionGateway {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    params: CompletionParams,
}

impl OpenAiCompletionGateway {
    /// Create a gateway from an explicit key.
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        params: CompletionParams,
        timeout: Option<Duration>,
    ) -> Result<Self, CompletionError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint: completions_endpoint(base_url),
            params,
        })
    }

    /// Create a gateway from the `[openai]` config section.
    ///
    /// Fails with [`CompletionError::Authentication`] when no API key can be
    /// resolved, so a missing credential is reported before any question is read.
    pub fn from_config(
        config: &FileOpenAiConfig,
        params: CompletionParams,
    ) -> Result<Self, CompletionError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            CompletionError::Authentication(format!(
                "{} not found in environment variables",
                config.api_key_env
            ))
        })?;

        Self::new(
            api_key,
            &config.base_url,
            params,
            config.timeout_seconds.map(Duration::from_secs),
        )
    }
}

#[async_trait]
impl CompletionGateway for OpenAiCompletionGateway {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = CompletionRequest {
            model: &self.params.model,
            prompt,
            temperature: self.params.temperature,
            max_tokens: self.params.max_tokens,
        };

        debug!(model = %self.params.model, prompt_chars = prompt.chars().count(), "Requesting completion");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(format!("Failed to reach OpenAI: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(status, &body);
            warn!(status = status.as_u16(), "Completion request failed: {}", message);
            return Err(classify_status(status, message));
        }

        let body: CompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

        let text = body.first_text().ok_or_else(|| {
            CompletionError::InvalidResponse("response contained no choices".to_string())
        })?;

        Ok(sanitize_completion(&text))
    }
}

fn completions_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), COMPLETIONS_PATH)
}

/// Prefer the API's own error message over the raw body
fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => format!(
            "HTTP {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        ),
        Err(_) => body.trim().to_string(),
    }
}

fn classify_status(status: StatusCode, message: String) -> CompletionError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CompletionError::Authentication(message),
        _ => CompletionError::Transport(message),
    }
}
