//! Result of one question-answer cycle.

use serde::{Deserialize, Serialize};

/// Everything produced while answering one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    /// The original question
    pub question: String,
    /// Page name the model suggested searching for
    pub page_query: String,
    /// Title of the page that was used
    pub page_title: String,
    /// Canonical URL of that page
    pub page_url: String,
    /// Word the model suggested searching for on the page
    pub search_term: String,
    /// Background text the answer was grounded in
    pub context: String,
    /// The model's answer
    pub answer: String,
    /// Supporting excerpt, present only when it occurs verbatim in the context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Abridged context with the excerpt marked
    pub highlighted_context: String,
}
