//! Excerpt highlighting.

pub mod highlighter;
pub mod marker;

pub use highlighter::{HighlightSettings, Highlighter, abridged_window};
pub use marker::MarkerStyle;
