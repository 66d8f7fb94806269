//! Application layer for wikibot
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AnswerConfig;
pub use ports::{
    completion_gateway::{CompletionError, CompletionGateway},
    encyclopedia_gateway::{EncyclopediaError, EncyclopediaGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::answer_question::{AnswerQuestionError, AnswerQuestionUseCase};
pub use use_cases::resolve_page::{ResolvePageError, ResolvePageUseCase};
