//! Domain layer for wikibot
//!
//! This crate contains the core logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Context
//!
//! A [`Context`] is the background text the model answers from: the page
//! summary followed by up to three excerpts of the page body around
//! occurrences of a model-suggested search term, capped at 4000 characters.
//!
//! ## Excerpt
//!
//! An [`Excerpt`] is the part of the context the model claims supports its
//! answer. It only exists when it occurs verbatim in the context; the
//! [`Highlighter`] marks it and abridges the context around it.

pub mod config;
pub mod context;
pub mod core;
pub mod encyclopedia;
pub mod highlight;
pub mod pipeline;
pub mod prompt;

// Re-export commonly used types
pub use config::OutputFormat;
pub use context::{Context, ContextBuilder, ContextSettings, Excerpt};
pub use core::{error::DomainError, question::Question};
pub use encyclopedia::Page;
pub use highlight::{HighlightSettings, Highlighter, MarkerStyle};
pub use pipeline::{AnswerResult, CompletionParams, Stage, sanitize_completion};
pub use prompt::PromptTemplate;
