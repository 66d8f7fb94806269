//! Settings controlling context extraction.

use serde::{Deserialize, Serialize};

/// Knobs for [`ContextBuilder`](super::ContextBuilder).
///
/// - `char_limit`: hard cap on the assembled context, in characters
/// - `half_window`: characters taken on each side of a term occurrence
/// - `max_excerpts`: how many non-summary excerpts may be accepted
/// - `divider`: separator placed between the summary and each excerpt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSettings {
    char_limit: usize,
    half_window: usize,
    max_excerpts: usize,
    divider: String,
}

impl ContextSettings {
    pub const DEFAULT_CHAR_LIMIT: usize = 4000;
    pub const DEFAULT_HALF_WINDOW: usize = 300;
    pub const DEFAULT_MAX_EXCERPTS: usize = 3;
    pub const DEFAULT_DIVIDER: &'static str = " [...] ";

    pub fn new(
        char_limit: usize,
        half_window: usize,
        max_excerpts: usize,
        divider: impl Into<String>,
    ) -> Self {
        Self {
            char_limit,
            half_window,
            max_excerpts,
            divider: divider.into(),
        }
    }

    // ==================== Accessors ====================

    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    pub fn half_window(&self) -> usize {
        self.half_window
    }

    pub fn max_excerpts(&self) -> usize {
        self.max_excerpts
    }

    pub fn divider(&self) -> &str {
        &self.divider
    }

    // ==================== Builder Methods ====================

    pub fn with_char_limit(mut self, chars: usize) -> Self {
        self.char_limit = chars;
        self
    }

    pub fn with_half_window(mut self, chars: usize) -> Self {
        self.half_window = chars;
        self
    }

    pub fn with_max_excerpts(mut self, count: usize) -> Self {
        self.max_excerpts = count;
        self
    }

    pub fn with_divider(mut self, divider: impl Into<String>) -> Self {
        self.divider = divider.into();
        self
    }
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_CHAR_LIMIT,
            Self::DEFAULT_HALF_WINDOW,
            Self::DEFAULT_MAX_EXCERPTS,
            Self::DEFAULT_DIVIDER,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = ContextSettings::default();
        assert_eq!(s.char_limit(), 4000);
        assert_eq!(s.half_window(), 300);
        assert_eq!(s.max_excerpts(), 3);
        assert_eq!(s.divider(), " [...] ");
    }

    #[test]
    fn test_builder_methods() {
        let s = ContextSettings::default()
            .with_char_limit(100)
            .with_max_excerpts(1)
            .with_divider(" | ");
        assert_eq!(s.char_limit(), 100);
        assert_eq!(s.max_excerpts(), 1);
        assert_eq!(s.divider(), " | ");
        assert_eq!(s.half_window(), 300);
    }
}
