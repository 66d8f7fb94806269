//! OpenAI completions adapter
//!
//! Implements [`CompletionGateway`](wikibot_application::CompletionGateway)
//! against the legacy `/v1/completions` endpoint.

pub mod gateway;
mod types;

pub use gateway::OpenAiCompletionGateway;
