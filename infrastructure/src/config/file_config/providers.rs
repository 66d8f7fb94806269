//! Provider configuration from TOML (`[openai]` and `[wikipedia]` sections)

use serde::{Deserialize, Serialize};

/// OpenAI API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Base URL for the OpenAI API (can be overridden for proxies).
    pub base_url: String,
    /// Request timeout in seconds (none by default).
    pub timeout_seconds: Option<u64>,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            timeout_seconds: None,
        }
    }
}

impl FileOpenAiConfig {
    /// Resolve the API key: direct value first, then the environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }
}

/// Wikipedia (MediaWiki Action API) configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWikipediaConfig {
    /// Action API endpoint
    pub api_url: String,
    /// User-Agent sent with every request
    pub user_agent: String,
    /// Maximum number of search results requested
    pub search_limit: u32,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
}

impl Default for FileWikipediaConfig {
    fn default() -> Self {
        Self {
            api_url: "https://en.wikipedia.org/w/api.php".to_string(),
            user_agent: concat!("wikibot/", env!("CARGO_PKG_VERSION")).to_string(),
            search_limit: 10,
            timeout_seconds: Some(30),
        }
    }
}
