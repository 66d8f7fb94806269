//! Context extraction from a resolved page.
//!
//! The context handed to the model is the page summary followed by up to
//! `max_excerpts` windows of body text around occurrences of a search term,
//! joined by a divider and hard-capped at `char_limit` characters.

use super::excerpt::Context;
use super::settings::ContextSettings;
use crate::core::string::{char_len, slice_chars, truncate_chars};
use crate::encyclopedia::Page;
use regex::RegexBuilder;

/// Builds a bounded [`Context`] from a [`Page`] and a search term.
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    settings: ContextSettings,
}

impl ContextBuilder {
    pub fn new(settings: ContextSettings) -> Self {
        Self { settings }
    }

    /// Assemble the context for `page` around occurrences of `search_term`.
    ///
    /// Excerpts already wholly contained in the summary are skipped and do
    /// not count towards `max_excerpts`.
    pub fn build(&self, page: &Page, search_term: &str) -> Context {
        let summary = page.summary.trim();
        let mut excerpts: Vec<&str> = Vec::new();

        for start in find_occurrences(&page.content, search_term) {
            if excerpts.len() == self.settings.max_excerpts() {
                break;
            }

            let (from, to) = excerpt_window(start, self.settings.half_window());
            let excerpt = slice_chars(&page.content, from, to).trim();

            if page.summary.contains(excerpt) {
                continue;
            }

            excerpts.push(excerpt);
        }

        let excerpt_count = excerpts.len();
        let joined = std::iter::once(summary)
            .chain(excerpts)
            .collect::<Vec<_>>()
            .join(self.settings.divider());

        Context::new(
            truncate_chars(&joined, self.settings.char_limit()).to_string(),
            excerpt_count,
        )
    }
}

/// Character offsets of every case-insensitive, non-overlapping occurrence
/// of `term` in `text`, left to right. The term is matched literally.
pub fn find_occurrences(text: &str, term: &str) -> Vec<usize> {
    if term.is_empty() {
        return Vec::new();
    }

    let Ok(pattern) = RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    else {
        return Vec::new();
    };

    let mut offsets = Vec::new();
    let mut last_byte = 0;
    let mut last_char = 0;
    for found in pattern.find_iter(text) {
        last_char += char_len(&text[last_byte..found.start()]);
        last_byte = found.start();
        offsets.push(last_char);
    }
    offsets
}

/// Window `[start - half, start + half)` around an occurrence.
///
/// Occurrences at or before `half` get `[0, start + start)` instead: the
/// window is mirrored around the offset rather than clamped at the body
/// start, so early occurrences yield shorter excerpts.
pub fn excerpt_window(start: usize, half: usize) -> (usize, usize) {
    if start > half {
        (start - half, start + half)
    } else {
        (0, start + start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const APOLLO_SUMMARY: &str = "Apollo 11 was the first crewed Moon landing...";

    fn page(content: &str, summary: &str) -> Page {
        Page::new(
            "Apollo 11",
            content,
            summary,
            "https://en.wikipedia.org/wiki/Apollo_11",
        )
    }

    #[test]
    fn test_find_occurrences_case_insensitive_in_order() {
        let offsets = find_occurrences("Landed, then LANDED, then landed.", "landed");
        assert_eq!(offsets, vec![0, 13, 26]);
    }

    #[test]
    fn test_find_occurrences_treats_term_literally() {
        assert_eq!(find_occurrences("a C++ program", "C++"), vec![2]);
        assert!(find_occurrences("abc", ".*").is_empty());
    }

    #[test]
    fn test_find_occurrences_uses_char_offsets() {
        assert_eq!(find_occurrences("€€ moon", "moon"), vec![3]);
    }

    #[test]
    fn test_find_occurrences_empty_term() {
        assert!(find_occurrences("anything", "").is_empty());
    }

    #[test]
    fn test_excerpt_window_regular() {
        assert_eq!(excerpt_window(1000, 300), (700, 1300));
        assert_eq!(excerpt_window(301, 300), (1, 601));
    }

    #[test]
    fn test_excerpt_window_mirrored_quirk() {
        assert_eq!(excerpt_window(120, 300), (0, 240));
        assert_eq!(excerpt_window(300, 300), (0, 600));
        assert_eq!(excerpt_window(0, 300), (0, 0));
    }

    #[test]
    fn test_zero_occurrences_yields_summary_only() {
        let p = page(&"b".repeat(2000), APOLLO_SUMMARY);
        let context = ContextBuilder::default().build(&p, "landed");
        assert_eq!(context.as_str(), APOLLO_SUMMARY);
        assert_eq!(context.excerpt_count(), 0);
        assert!(!context.as_str().contains(" [...] "));
    }

    #[test]
    fn test_apollo_single_occurrence() {
        let body = format!("{}landed{}", "a".repeat(50), "b".repeat(1944));
        assert_eq!(char_len(&body), 2000);

        let context = ContextBuilder::default().build(&page(&body, APOLLO_SUMMARY), "landed");

        let expected_excerpt = format!("{}landed{}", "a".repeat(50), "b".repeat(44));
        assert_eq!(
            context.as_str(),
            format!("{APOLLO_SUMMARY} [...] {expected_excerpt}")
        );
        assert_eq!(context.excerpt_count(), 1);
    }

    #[test]
    fn test_excerpt_is_trimmed() {
        let body = format!("{}   moon   {}", "x".repeat(400), "y".repeat(400));
        let settings = ContextSettings::default().with_half_window(5);
        let context = ContextBuilder::new(settings).build(&page(&body, "S"), "moon");
        // window [398, 408) = "xx   moon " -> trimmed
        assert_eq!(context.as_str(), "S [...] xx   moon");
    }

    #[test]
    fn test_at_most_three_excerpts() {
        let body: String = (0..10)
            .map(|i| format!("{} term{} ", "x".repeat(700), i))
            .collect();
        let context = ContextBuilder::default().build(&page(&body, "Summary."), "term");

        assert_eq!(context.excerpt_count(), 3);
        assert_eq!(context.as_str().matches(" [...] ").count(), 3);
        assert!(context.as_str().contains("term0"));
        assert!(context.as_str().contains("term2"));
        assert!(!context.as_str().contains("term3"));
    }

    #[test]
    fn test_excerpts_in_summary_are_skipped_and_not_counted() {
        let summary = "The term appears here first.";
        let body = format!(
            "{summary} {} term again {}",
            "z".repeat(800),
            "z".repeat(800)
        );
        let settings = ContextSettings::default().with_max_excerpts(1);
        let context = ContextBuilder::new(settings).build(&page(&body, summary), "term");

        assert_eq!(context.excerpt_count(), 1);
        assert!(context.as_str().starts_with("The term appears here first. [...] "));
        assert!(context.as_str().contains("term again"));
    }

    #[test]
    fn test_summary_covering_body_yields_summary_only() {
        let text = "The Moon landing happened in 1969. ".repeat(40);
        let context = ContextBuilder::default().build(&page(&text, &text), "moon");
        assert_eq!(context.as_str(), text.trim());
        assert_eq!(context.excerpt_count(), 0);
    }

    #[test]
    fn test_output_never_exceeds_char_limit() {
        let long_summary = "s".repeat(5000);
        let body = format!("{} landed {}", "a".repeat(900), "b".repeat(900));
        let context = ContextBuilder::default().build(&page(&body, &long_summary), "landed");
        assert_eq!(context.char_len(), 4000);

        let body: String = (0..50).map(|_| format!("{}landed", "c".repeat(650))).collect();
        let context = ContextBuilder::default().build(&page(&body, "short"), "landed");
        assert!(context.char_len() <= 4000);
    }

    #[test]
    fn test_char_limit_counts_characters() {
        let summary = "€".repeat(10);
        let settings = ContextSettings::default().with_char_limit(4);
        let context = ContextBuilder::new(settings).build(&page("", &summary), "x");
        assert_eq!(context.as_str(), "€€€€");
    }

    #[test]
    fn test_summary_is_trimmed() {
        let context = ContextBuilder::default().build(&page("", "  Summary text \n"), "x");
        assert_eq!(context.as_str(), "Summary text");
    }
}
