//! Emphasis markers wrapped around highlighted text.

use serde::{Deserialize, Serialize};

const ANSI_BOLD_START: &str = "\x1b[1m";
const ANSI_BOLD_END: &str = "\x1b[0m";
const PLAIN_BOLD: &str = "**";

/// How emphasised text is marked in terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStyle {
    /// ANSI bold / reset escape sequences
    #[default]
    Ansi,
    /// Markdown-style `**` on both sides
    Plain,
}

impl MarkerStyle {
    /// Pick ANSI markers when colour output is enabled.
    pub fn for_color(color: bool) -> Self {
        if color { Self::Ansi } else { Self::Plain }
    }

    pub fn start(&self) -> &'static str {
        match self {
            Self::Ansi => ANSI_BOLD_START,
            Self::Plain => PLAIN_BOLD,
        }
    }

    pub fn end(&self) -> &'static str {
        match self {
            Self::Ansi => ANSI_BOLD_END,
            Self::Plain => PLAIN_BOLD,
        }
    }

    /// Wrap `text` in start/end markers.
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.start(), text, self.end())
    }
}
