//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated question to answer
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: character-offset string helpers

pub mod error;
pub mod question;
pub mod string;
