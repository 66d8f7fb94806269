//! Resolve Page use case
//!
//! Turns a free-text search query into a single encyclopedia page.

use crate::ports::encyclopedia_gateway::{EncyclopediaError, EncyclopediaGateway};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use wikibot_domain::Page;

/// Errors that can occur while resolving a page
#[derive(Error, Debug)]
pub enum ResolvePageError {
    #[error("No Wikipedia pages found to answer the question (searched for \"{0}\")")]
    NoResults(String),

    #[error("\"{0}\" is a disambiguation page without options")]
    EmptyDisambiguation(String),

    #[error("Encyclopedia error: {0}")]
    Encyclopedia(#[from] EncyclopediaError),
}

/// Use case for resolving a search query to a page
///
/// Takes the first search hit. When that hit is a disambiguation page the
/// first listed option is fetched instead, once, with no ranking involved.
pub struct ResolvePageUseCase<E: EncyclopediaGateway + 'static> {
    gateway: Arc<E>,
}

impl<E: EncyclopediaGateway + 'static> ResolvePageUseCase<E> {
    pub fn new(gateway: Arc<E>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, query: &str) -> Result<Page, ResolvePageError> {
        let titles = self.gateway.search(query).await?;
        debug!("Search for '{}' returned {} titles", query, titles.len());

        let Some(first) = titles.first() else {
            return Err(ResolvePageError::NoResults(query.to_string()));
        };

        match self.gateway.fetch_page(first).await {
            Ok(page) => Ok(page),
            Err(EncyclopediaError::Disambiguation { title, options }) => {
                let Some(option) = options.first() else {
                    return Err(ResolvePageError::EmptyDisambiguation(title));
                };
                info!("'{}' is ambiguous, falling back to '{}'", title, option);
                Ok(self.gateway.fetch_page(option).await?)
            }
            Err(e) => Err(e.into()),
        }
    }
}
