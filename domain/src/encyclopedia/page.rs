//! Page entity

use serde::{Deserialize, Serialize};

/// A resolved encyclopedia page
///
/// Owned by the orchestration flow for the duration of one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Canonical page title (after redirects)
    pub title: String,
    /// Full plain-text body
    pub content: String,
    /// Plain-text introduction section
    pub summary: String,
    /// Canonical URL of the page
    pub url: String,
}

impl Page {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        summary: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            summary: summary.into(),
            url: url.into(),
        }
    }
}
