//! Context and highlight configuration from TOML (`[context]`, `[highlight]`)

use serde::{Deserialize, Serialize};
use wikibot_domain::{ContextSettings, HighlightSettings, MarkerStyle};

/// Raw context extraction settings from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContextConfig {
    /// Hard cap on the context, in characters
    pub char_limit: usize,
    /// Characters on each side of a search-term occurrence
    pub half_window: usize,
    /// Maximum number of excerpts besides the summary
    pub max_excerpts: usize,
    /// Separator between summary and excerpts
    pub divider: String,
}

impl Default for FileContextConfig {
    fn default() -> Self {
        Self {
            char_limit: ContextSettings::DEFAULT_CHAR_LIMIT,
            half_window: ContextSettings::DEFAULT_HALF_WINDOW,
            max_excerpts: ContextSettings::DEFAULT_MAX_EXCERPTS,
            divider: ContextSettings::DEFAULT_DIVIDER.to_string(),
        }
    }
}

impl FileContextConfig {
    pub fn to_settings(&self) -> ContextSettings {
        ContextSettings::new(
            self.char_limit,
            self.half_window,
            self.max_excerpts,
            self.divider.clone(),
        )
    }
}

/// Raw highlight settings from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHighlightConfig {
    /// Characters kept on each side of the excerpt
    pub half_window: usize,
}

impl Default for FileHighlightConfig {
    fn default() -> Self {
        Self {
            half_window: HighlightSettings::DEFAULT_HALF_WINDOW,
        }
    }
}

impl FileHighlightConfig {
    /// Markers follow the output colour setting.
    pub fn to_settings(&self, color: bool) -> HighlightSettings {
        HighlightSettings::new(self.half_window, MarkerStyle::for_color(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_domain_settings() {
        assert_eq!(
            FileContextConfig::default().to_settings(),
            ContextSettings::default()
        );
        assert_eq!(
            FileHighlightConfig::default().to_settings(true),
            HighlightSettings::default()
        );
    }

    #[test]
    fn test_plain_markers_without_color() {
        let settings = FileHighlightConfig::default().to_settings(false);
        assert_eq!(settings.markers, MarkerStyle::Plain);
    }
}
