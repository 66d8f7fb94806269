//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain settings.

mod completion;
mod context;
mod output;
mod providers;
mod repl;

pub use completion::FileCompletionConfig;
pub use context::{FileContextConfig, FileHighlightConfig};
pub use output::{FileOutputConfig, FileOutputFormat};
pub use providers::{FileOpenAiConfig, FileWikipediaConfig};
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wikibot_domain::DomainError;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    #[error("[completion] {0}")]
    Completion(#[from] DomainError),

    #[error("context.{0} must be greater than 0")]
    InvalidContextSetting(&'static str),

    #[error("{0}.timeout_seconds cannot be 0")]
    InvalidTimeout(&'static str),

    #[error("wikipedia.search_limit must be greater than 0")]
    InvalidSearchLimit,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// OpenAI API settings
    pub openai: FileOpenAiConfig,
    /// Generation parameters
    pub completion: FileCompletionConfig,
    /// Wikipedia API settings
    pub wikipedia: FileWikipediaConfig,
    /// Context extraction settings
    pub context: FileContextConfig,
    /// Excerpt highlight settings
    pub highlight: FileHighlightConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.completion.to_params().validate()?;

        if self.context.char_limit == 0 {
            return Err(ConfigValidationError::InvalidContextSetting("char_limit"));
        }

        if self.context.max_excerpts == 0 {
            return Err(ConfigValidationError::InvalidContextSetting("max_excerpts"));
        }

        // Timeout of 0 seconds doesn't make sense
        if let Some(0) = self.openai.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout("openai"));
        }
        if let Some(0) = self.wikipedia.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout("wikipedia"));
        }

        if self.wikipedia.search_limit == 0 {
            return Err(ConfigValidationError::InvalidSearchLimit);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikibot_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[openai]
api_key_env = "MY_OPENAI_KEY"
timeout_seconds = 60

[completion]
model = "gpt-3.5-turbo-instruct"
temperature = 0.2
max_tokens = 128

[wikipedia]
api_url = "https://de.wikipedia.org/w/api.php"

[context]
char_limit = 2000
divider = " ... "

[highlight]
half_window = 100

[output]
format = "answer"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/wikibot/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.openai.api_key_env, "MY_OPENAI_KEY");
        assert_eq!(config.openai.timeout_seconds, Some(60));
        assert_eq!(config.completion.max_tokens, 128);
        assert_eq!(config.wikipedia.api_url, "https://de.wikipedia.org/w/api.php");
        assert_eq!(config.context.char_limit, 2000);
        assert_eq!(config.context.max_excerpts, 3);
        assert_eq!(config.context.divider, " ... ");
        assert_eq!(config.highlight.half_window, 100);
        assert_eq!(config.output.format, Some(OutputFormat::Answer));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.openai.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.context.char_limit, 4000);
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = FileConfig::default();
        config.completion.temperature = 3.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigValidationError::Completion(DomainError::InvalidSetting(_))
        ));
        assert_eq!(
            err.to_string(),
            "[completion] Invalid setting: temperature must be between 0.0 and 2.0, got 3"
        );

        let mut config = FileConfig::default();
        config.completion.model = " ".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::Completion(DomainError::InvalidSetting(
                "model name cannot be empty".to_string()
            )))
        );

        let mut config = FileConfig::default();
        config.completion.max_tokens = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::Completion(_))
        ));

        let mut config = FileConfig::default();
        config.context.max_excerpts = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidContextSetting("max_excerpts"))
        );

        let mut config = FileConfig::default();
        config.openai.timeout_seconds = Some(0);
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout("openai"))
        );
    }
}
