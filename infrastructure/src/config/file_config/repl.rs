//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Prompt printed before each question
    pub prompt: String,
    /// Show a spinner per stage while answering
    pub show_progress: bool,
    /// History file; `<data dir>/wikibot/history.txt` when unset
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            prompt: "(wikibot) ".to_string(),
            show_progress: true,
            history_file: None,
        }
    }
}

impl FileReplConfig {
    /// Where REPL history is loaded from and saved to.
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::data_dir().map(|p| p.join("wikibot").join("history.txt")),
        }
    }
}
