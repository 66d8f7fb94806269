//! Context extraction.
//!
//! - [`ContextBuilder`]: summary + excerpts around search-term occurrences
//! - [`ContextSettings`]: size knobs (limit, window, excerpt count, divider)
//! - [`Context`] / [`Excerpt`]: the assembled text and a verified substring of it

pub mod builder;
pub mod excerpt;
pub mod settings;

pub use builder::{ContextBuilder, excerpt_window, find_occurrences};
pub use excerpt::{Context, Excerpt};
pub use settings::ContextSettings;
