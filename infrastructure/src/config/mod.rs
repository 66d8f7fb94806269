//! Configuration file loading for wikibot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `WIKIBOT_<SECTION>__<KEY>` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./wikibot.toml` or `./.wikibot.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/wikibot/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCompletionConfig, FileConfig, FileContextConfig,
    FileHighlightConfig, FileOpenAiConfig, FileOutputConfig, FileOutputFormat, FileReplConfig,
    FileWikipediaConfig,
};
pub use loader::ConfigLoader;
