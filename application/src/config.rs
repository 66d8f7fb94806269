//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//! how much context is extracted, how the excerpt is highlighted, and which
//! date the answer prompt states.

use chrono::NaiveDate;
use wikibot_domain::{ContextSettings, HighlightSettings};

/// Date format used in the answer prompt, e.g. "July 20, 1969"
pub const PROMPT_DATE_FORMAT: &str = "%B %d, %Y";

/// Configuration for [`AnswerQuestionUseCase`](crate::AnswerQuestionUseCase).
#[derive(Debug, Clone, Default)]
pub struct AnswerConfig {
    /// Context extraction knobs
    pub context: ContextSettings,
    /// Highlight window and markers
    pub highlight: HighlightSettings,
    /// Fixed "today" for the answer prompt; the local date when `None`.
    pub today: Option<NaiveDate>,
}

impl AnswerConfig {
    pub fn new(context: ContextSettings, highlight: HighlightSettings) -> Self {
        Self {
            context,
            highlight,
            today: None,
        }
    }

    /// Pin the date stated in the answer prompt.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Today's date formatted for the answer prompt.
    pub fn today_label(&self) -> String {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
            .format(PROMPT_DATE_FORMAT)
            .to_string()
    }
}
