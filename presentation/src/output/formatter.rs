//! Output formatter trait

use wikibot_domain::{AnswerResult, OutputFormat};

/// Trait for formatting answer results
pub trait OutputFormatter {
    /// Answer, highlighted context and page URL
    fn format_full(&self, result: &AnswerResult) -> String;

    /// The answer alone
    fn format_answer(&self, result: &AnswerResult) -> String;

    /// The whole result as JSON
    fn format_json(&self, result: &AnswerResult) -> String;

    /// Format according to `format`
    fn render(&self, result: &AnswerResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format_full(result),
            OutputFormat::Answer => self.format_answer(result),
            OutputFormat::Json => self.format_json(result),
        }
    }
}
