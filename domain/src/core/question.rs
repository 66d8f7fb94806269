//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A question to be answered from Wikipedia (Value Object)
///
/// Immutable input to one question-answer cycle. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a new question, returning None if blank
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl FromStr for Question {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
            .ok_or_else(|| DomainError::InvalidQuestion("question cannot be empty".to_string()))
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_new(s)
            .ok_or_else(|| DomainError::InvalidQuestion("question cannot be empty".to_string()))
    }
}

impl From<Question> for String {
    fn from(q: Question) -> Self {
        q.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
