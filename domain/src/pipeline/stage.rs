//! Stages of a question-answer cycle

use serde::{Deserialize, Serialize};

/// Stage of one question-answer cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Ask the model which page to search for
    PageQuery,
    /// Search the encyclopedia and fetch the page
    PageLookup,
    /// Ask the model which word to look for on the page
    SearchTerm,
    /// Extract the context around the search term
    Context,
    /// Generate answer and excerpt concurrently
    Answer,
}

impl Stage {
    /// All stages, in execution order
    pub const ALL: [Stage; 5] = [
        Stage::PageQuery,
        Stage::PageLookup,
        Stage::SearchTerm,
        Stage::Context,
        Stage::Answer,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Stage::PageQuery => "page_query",
            Stage::PageLookup => "page_lookup",
            Stage::SearchTerm => "search_term",
            Stage::Context => "context",
            Stage::Answer => "answer",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Stage::PageQuery => "Choosing page",
            Stage::PageLookup => "Looking up page",
            Stage::SearchTerm => "Choosing search term",
            Stage::Context => "Extracting context",
            Stage::Answer => "Answering",
        }
    }

    /// 1-based position in [`Stage::ALL`]
    pub fn ordinal(&self) -> usize {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .map(|i| i + 1)
            .unwrap_or(0)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
