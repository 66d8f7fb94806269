//! Console output formatter for answer results

use crate::output::formatter::OutputFormatter;
use wikibot_domain::{AnswerResult, MarkerStyle};

/// Formats answer results for console display
#[derive(Debug, Clone, Copy)]
pub struct ConsoleFormatter {
    color: bool,
}

impl ConsoleFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Bold with colour, `**` without; matches the excerpt markers.
    fn emphasize(&self, text: &str) -> String {
        MarkerStyle::for_color(self.color).wrap(text)
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_full(&self, result: &AnswerResult) -> String {
        format!(
            "\n\n    Answer: {}\n\n    Context:\n\n    > [...] {}  [...]\n\n    URL: {}\n\n    ",
            self.emphasize(&result.answer),
            result.highlighted_context,
            result.page_url
        )
    }

    fn format_answer(&self, result: &AnswerResult) -> String {
        format!("Answer: {}", self.emphasize(&result.answer))
    }

    fn format_json(&self, result: &AnswerResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikibot_domain::OutputFormat;

    fn apollo() -> AnswerResult {
        AnswerResult {
            question: "When did Apollo 11 land?".to_string(),
            page_query: "Apollo 11".to_string(),
            page_title: "Apollo 11".to_string(),
            page_url: "https://en.wikipedia.org/wiki/Apollo_11".to_string(),
            search_term: "landed".to_string(),
            context: "Apollo 11 landed on July 20, 1969.".to_string(),
            answer: "July 20, 1969".to_string(),
            excerpt: Some("July 20, 1969".to_string()),
            highlighted_context: "Apollo 11 landed on \x1b[1mJuly 20, 1969\x1b[0m.".to_string(),
        }
    }

    #[test]
    fn test_full_block() {
        let output = ConsoleFormatter::new(true).format_full(&apollo());
        assert!(output.contains("    Answer: \x1b[1mJuly 20, 1969\x1b[0m\n"));
        assert!(output.contains("    Context:\n\n    > [...] Apollo 11 landed on \x1b[1mJuly 20, 1969\x1b[0m.  [...]\n"));
        assert!(output.contains("    URL: https://en.wikipedia.org/wiki/Apollo_11\n"));
    }

    #[test]
    fn test_answer_without_color_uses_plain_markers() {
        let output = ConsoleFormatter::new(false).render(&apollo(), OutputFormat::Answer);
        assert_eq!(output, "Answer: **July 20, 1969**");

        let full = ConsoleFormatter::new(false).format_full(&apollo());
        assert!(full.contains("    Answer: **July 20, 1969**\n"));
        assert!(!full.contains("\x1b["));
    }

    #[test]
    fn test_json_output() {
        let output = ConsoleFormatter::default().render(&apollo(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["page_title"], "Apollo 11");
        assert_eq!(value["excerpt"], "July 20, 1969");
    }
}
