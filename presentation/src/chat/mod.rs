//! Interactive question loop
//!
//! Provides a readline-based REPL that answers one question per line.

mod repl;

pub use repl::{ReplOptions, WikiRepl};
