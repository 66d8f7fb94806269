//! Context and excerpt value objects.

use crate::core::string::char_len;
use serde::{Deserialize, Serialize};

/// Background text assembled from a page summary plus excerpts (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    text: String,
    excerpt_count: usize,
}

impl Context {
    pub(crate) fn new(text: String, excerpt_count: usize) -> Self {
        Self {
            text,
            excerpt_count,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        char_len(&self.text)
    }

    /// Number of non-summary excerpts that were accepted
    pub fn excerpt_count(&self) -> usize {
        self.excerpt_count
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// A verbatim, case-sensitive substring of a [`Context`] (Value Object)
///
/// Only constructible through [`Excerpt::verify`], so holding one proves
/// it occurs in the context it was checked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Excerpt(String);

impl Excerpt {
    /// Accept `candidate` only if it literally occurs in `context`.
    pub fn verify(candidate: impl Into<String>, context: &Context) -> Option<Self> {
        let candidate = candidate.into();
        if context.as_str().contains(candidate.as_str()) {
            Some(Self(candidate))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
