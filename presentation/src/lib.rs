//! Presentation layer for wikibot
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive question loop.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ReplOptions, WikiRepl};
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
