//! Infrastructure layer for wikibot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod openai;
pub mod wikipedia;

#[cfg(test)]
mod test_server;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOpenAiConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig, FileWikipediaConfig,
};
pub use openai::OpenAiCompletionGateway;
pub use wikipedia::WikipediaGateway;
