//! Wire types for `/v1/completions`

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct CompletionRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompletionChoice {
    pub text: Option<String>,
}

impl CompletionResponse {
    /// Text of the first choice, if any
    pub fn first_text(self) -> Option<String> {
        self.choices.into_iter().next().and_then(|c| c.text)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ApiError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = CompletionRequest {
            model: "gpt-3.5-turbo-instruct",
            prompt: "Page name:",
            temperature: 0.5,
            max_tokens: 256,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo-instruct");
        assert_eq!(json["prompt"], "Page name:");
        assert_eq!(json["temperature"], 0.5);
        assert_eq!(json["max_tokens"], 256);
    }

    #[test]
    fn test_first_choice_text() {
        let body = r#"{"id":"cmpl-1","choices":[{"text":" Apollo 11\n","index":0},{"text":"other"}]}"#;
        let response: CompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_text().as_deref(), Some(" Apollo 11\n"));
    }

    #[test]
    fn test_no_choices() {
        let response: CompletionResponse = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert!(response.first_text().is_none());
    }

    #[test]
    fn test_error_envelope() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error.message, "Incorrect API key provided");
    }
}
