//! Progress reporting while a question is answered

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use wikibot_application::ProgressNotifier;
use wikibot_domain::{Page, Stage};

/// Reports progress with a spinner per stage
pub struct ProgressReporter {
    stage_bar: Mutex<Option<ProgressBar>>,
    announce_page: bool,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            stage_bar: Mutex::new(None),
            announce_page: true,
        }
    }

    /// Whether `Pulling up page: <title>` is printed to stdout.
    /// Off when stdout must carry nothing but the rendered result.
    pub fn with_page_announcement(mut self, announce: bool) -> Self {
        self.announce_page = announce;
        self
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn stage_prefix(stage: Stage) -> String {
        format!("[{}/{}]", stage.ordinal(), Stage::ALL.len())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: Stage) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(Self::stage_prefix(stage));
        pb.set_message(format!("{}...", stage.display_name()));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.stage_bar.lock() {
            if let Some(previous) = slot.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn on_stage_complete(&self, stage: Stage, success: bool) {
        let Some(pb) = self.stage_bar.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        if success {
            pb.finish_and_clear();
        } else {
            pb.abandon_with_message(format!("{} {}", "x".red(), stage.display_name()));
        }
    }

    fn on_page_resolved(&self, page: &Page) {
        if self.announce_page {
            println!("{}", page_announcement(page));
        }
    }
}

fn page_announcement(page: &Page) -> String {
    format!("Pulling up page: {}", page.title)
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress {
    announce_page: bool,
}

impl SimpleProgress {
    pub fn new() -> Self {
        Self { announce_page: true }
    }

    pub fn with_page_announcement(mut self, announce: bool) -> Self {
        self.announce_page = announce;
        self
    }
}

impl Default for SimpleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: Stage) {
        eprintln!(
            "{} {} {}",
            "->".cyan(),
            ProgressReporter::stage_prefix(stage),
            stage.display_name().bold()
        );
    }

    fn on_stage_complete(&self, stage: Stage, success: bool) {
        if !success {
            eprintln!("  {} {} (failed)", "x".red(), stage.display_name());
        }
    }

    fn on_page_resolved(&self, page: &Page) {
        if self.announce_page {
            println!("{}", page_announcement(page));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_prefix() {
        assert_eq!(ProgressReporter::stage_prefix(Stage::PageQuery), "[1/5]");
        assert_eq!(ProgressReporter::stage_prefix(Stage::Answer), "[5/5]");
    }

    #[test]
    fn test_reporter_tracks_one_bar_at_a_time() {
        let reporter = ProgressReporter::new();
        reporter.on_stage_start(Stage::PageQuery);
        assert!(reporter.stage_bar.lock().unwrap().is_some());
        reporter.on_stage_complete(Stage::PageQuery, true);
        assert!(reporter.stage_bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_page_announcement_switch() {
        assert!(ProgressReporter::new().announce_page);
        assert!(!ProgressReporter::new().with_page_announcement(false).announce_page);
        assert!(SimpleProgress::default().announce_page);
        assert!(!SimpleProgress::new().with_page_announcement(false).announce_page);

        let page = Page::new("Apollo 11", "", "", "https://en.wikipedia.org/wiki/Apollo_11");
        assert_eq!(page_announcement(&page), "Pulling up page: Apollo 11");
    }
}
