//! Excerpt highlighting within a context.

use super::marker::MarkerStyle;
use crate::core::string::{char_len, char_offset, flatten_newlines, slice_chars};
use serde::{Deserialize, Serialize};

/// Settings for [`Highlighter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSettings {
    /// Characters kept on each side of the excerpt
    pub half_window: usize,
    pub markers: MarkerStyle,
}

impl HighlightSettings {
    pub const DEFAULT_HALF_WINDOW: usize = 200;

    pub fn new(half_window: usize, markers: MarkerStyle) -> Self {
        Self {
            half_window,
            markers,
        }
    }
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HALF_WINDOW, MarkerStyle::default())
    }
}

/// Marks an excerpt inside a context and abridges the context around it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Highlighter {
    settings: HighlightSettings,
}

impl Highlighter {
    pub fn new(settings: HighlightSettings) -> Self {
        Self { settings }
    }

    /// Highlight `excerpt` inside `context`.
    ///
    /// Without a verbatim excerpt the whole context comes back with newlines
    /// flattened. Otherwise every occurrence is wrapped in markers and the
    /// result is cut to a window around the first one. The window offset is
    /// taken from the marked string, so it sits one start marker further
    /// right than the excerpt's position in the original context.
    pub fn highlight(&self, context: &str, excerpt: Option<&str>) -> String {
        let Some(excerpt) = excerpt.filter(|e| context.contains(e)) else {
            return flatten_newlines(context);
        };

        let marked = if excerpt.is_empty() {
            context.to_string()
        } else {
            context.replace(excerpt, &self.settings.markers.wrap(excerpt))
        };

        let Some(byte) = marked.find(excerpt) else {
            return flatten_newlines(context);
        };
        let offset = char_offset(&marked, byte);
        let (from, to) = abridged_window(offset, char_len(excerpt), self.settings.half_window);

        flatten_newlines(slice_chars(&marked, from, to))
    }
}

/// Window `[offset - half, offset + len + half)` around a match.
///
/// Matches at or before `half` start the window at zero and keep the full
/// `len + half` tail.
pub fn abridged_window(offset: usize, len: usize, half: usize) -> (usize, usize) {
    if offset > half {
        (offset - half, offset + len + half)
    } else {
        (0, offset + len + half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Highlighter {
        Highlighter::new(HighlightSettings::new(200, MarkerStyle::Plain))
    }

    #[test]
    fn test_none_returns_flattened_context() {
        let context = "Line one\nLine two\n";
        assert_eq!(plain().highlight(context, None), "Line one Line two ");
    }

    #[test]
    fn test_missing_excerpt_returns_flattened_context() {
        let context = "Apollo 11\nlanded in 1969.";
        assert_eq!(
            plain().highlight(context, Some("Apollo 12")),
            "Apollo 11 landed in 1969."
        );
        // Case-sensitive containment
        assert_eq!(
            plain().highlight(context, Some("apollo 11")),
            "Apollo 11 landed in 1969."
        );
    }

    #[test]
    fn test_short_context_is_fully_kept() {
        let context = "Apollo 11 landed\non July 20, 1969.";
        assert_eq!(
            plain().highlight(context, Some("July 20, 1969")),
            "Apollo 11 landed on **July 20, 1969**."
        );
    }

    #[test]
    fn test_ansi_markers() {
        let highlighter = Highlighter::default();
        assert_eq!(
            highlighter.highlight("on July 20", Some("July")),
            "on \x1b[1mJuly\x1b[0m 20"
        );
    }

    #[test]
    fn test_long_context_is_abridged_around_excerpt() {
        let context = format!("{}EXCERPT{}", "a".repeat(1000), "b".repeat(1000));
        let result = plain().highlight(&context, Some("EXCERPT"));

        assert_eq!(
            result,
            format!("{}**EXCERPT**{}", "a".repeat(198), "b".repeat(198))
        );
        assert!(char_len(&result) <= "EXCERPT".len() + 400 + 4);
    }

    #[test]
    fn test_window_is_relative_to_marked_string() {
        // Excerpt sits at 199 in the original but at 201 after the start marker
        let context = format!("{}E{}", "a".repeat(199), "b".repeat(300));
        let result = plain().highlight(&context, Some("E"));

        assert!(result.starts_with(&format!("{}**E**", "a".repeat(198))));
        assert_eq!(char_len(&result), 401);
    }

    #[test]
    fn test_every_occurrence_is_marked() {
        assert_eq!(
            plain().highlight("cat and cat", Some("cat")),
            "**cat** and **cat**"
        );
    }

    #[test]
    fn test_empty_excerpt_keeps_leading_window() {
        let context = "x".repeat(300);
        assert_eq!(plain().highlight(&context, Some("")), "x".repeat(200));
    }

    #[test]
    fn test_abridged_window() {
        assert_eq!(abridged_window(500, 10, 200), (300, 710));
        assert_eq!(abridged_window(200, 10, 200), (0, 410));
        assert_eq!(abridged_window(50, 10, 200), (0, 260));
    }
}
