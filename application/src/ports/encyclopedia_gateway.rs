//! Encyclopedia Gateway port
//!
//! Defines the interface for searching and fetching encyclopedia pages.

use async_trait::async_trait;
use thiserror::Error;
use wikibot_domain::Page;

/// Errors that can occur during encyclopedia operations
#[derive(Error, Debug)]
pub enum EncyclopediaError {
    /// The title maps to several distinct topics
    #[error("\"{title}\" may refer to: {}", .options.join(", "))]
    Disambiguation { title: String, options: Vec<String> },

    #[error("Page not found: {0}")]
    PageMissing(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Gateway for an encyclopedia's search and page APIs
#[async_trait]
pub trait EncyclopediaGateway: Send + Sync {
    /// Full-text search, returning candidate titles best match first
    async fn search(&self, query: &str) -> Result<Vec<String>, EncyclopediaError>;

    /// Fetch a page by exact title
    ///
    /// Fails with [`EncyclopediaError::Disambiguation`] when the title is a
    /// disambiguation page.
    async fn fetch_page(&self, title: &str) -> Result<Page, EncyclopediaError>;
}
