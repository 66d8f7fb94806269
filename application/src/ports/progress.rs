//! Progress notification port
//!
//! Defines the interface for reporting progress while a question is answered.

use wikibot_domain::{Page, Stage};

/// Callback for progress updates during a question-answer cycle
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinners, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts
    fn on_stage_start(&self, stage: Stage);

    /// Called when a stage finishes, successfully or not
    fn on_stage_complete(&self, stage: Stage, success: bool);

    /// Called once the page to answer from is known
    fn on_page_resolved(&self, _page: &Page) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: Stage) {}
    fn on_stage_complete(&self, _stage: Stage, _success: bool) {}
}
