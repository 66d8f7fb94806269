//! Wikipedia Encyclopedia Gateway implementation

use super::api::{ApiError, PageInfo, PagesQuery, ParseResponse, QueryResponse, SearchQuery};
use super::disambiguation::disambiguation_options;
use crate::config::FileWikipediaConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};
use wikibot_application::{EncyclopediaError, EncyclopediaGateway};
use wikibot_domain::Page;

/// Encyclopedia gateway backed by the MediaWiki Action API
pub struct WikipediaGateway {
    client: reqwest::Client,
    api_url: String,
    search_limit: u32,
}

impl WikipediaGateway {
    pub fn new(config: &FileWikipediaConfig) -> Result<Self, EncyclopediaError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| EncyclopediaError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            search_limit: config.search_limit,
        })
    }

    /// Issue a GET against the API with `format=json&formatversion=2`.
    async fn get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, EncyclopediaError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await
            .map_err(|e| EncyclopediaError::Transport(format!("Failed to reach Wikipedia: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EncyclopediaError::Transport(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json()
            .await
            .map_err(|e| EncyclopediaError::InvalidResponse(e.to_string()))
    }

    async fn query_page(&self, title: &str, params: &[(&str, &str)]) -> Result<PageInfo, EncyclopediaError> {
        let mut all = vec![("action", "query"), ("titles", title), ("redirects", "1")];
        all.extend_from_slice(params);

        let response: QueryResponse<PagesQuery> = self.get(&all).await?;
        let pages = unwrap_query(response)?;
        let page = pages
            .into_first_page()
            .ok_or_else(|| EncyclopediaError::PageMissing(title.to_string()))?;

        if page.missing || page.invalid {
            return Err(EncyclopediaError::PageMissing(title.to_string()));
        }
        Ok(page)
    }

    async fn extract(&self, title: &str, intro_only: bool) -> Result<String, EncyclopediaError> {
        let mut params = vec![("prop", "extracts"), ("explaintext", "1")];
        if intro_only {
            params.push(("exintro", "1"));
        }
        let page = self.query_page(title, &params).await?;
        Ok(page.extract.unwrap_or_default())
    }

    async fn options_for(&self, title: &str) -> Result<Vec<String>, EncyclopediaError> {
        let response: ParseResponse = self
            .get(&[("action", "parse"), ("page", title), ("prop", "text"), ("redirects", "1")])
            .await?;

        if let Some(error) = response.error {
            return Err(api_error(error));
        }
        let parsed = response.parse.ok_or_else(|| {
            EncyclopediaError::InvalidResponse("parse response without content".to_string())
        })?;

        disambiguation_options(&parsed.text).map_err(EncyclopediaError::InvalidResponse)
    }
}

#[async_trait]
impl EncyclopediaGateway for WikipediaGateway {
    async fn search(&self, query: &str) -> Result<Vec<String>, EncyclopediaError> {
        let limit = self.search_limit.to_string();
        let response: QueryResponse<SearchQuery> = self
            .get(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("srlimit", limit.as_str()),
                ("srprop", ""),
            ])
            .await?;

        let titles: Vec<String> = unwrap_query(response)?
            .search
            .into_iter()
            .map(|hit| hit.title)
            .collect();

        debug!(query, results = titles.len(), "Wikipedia search");
        Ok(titles)
    }

    async fn fetch_page(&self, title: &str) -> Result<Page, EncyclopediaError> {
        let page_info = self
            .query_page(
                title,
                &[("prop", "info|pageprops"), ("inprop", "url"), ("ppprop", "disambiguation")],
            )
            .await?;

        if page_info.is_disambiguation() {
            let options = self.options_for(&page_info.title).await?;
            info!(title = %page_info.title, options = options.len(), "Disambiguation page");
            return Err(EncyclopediaError::Disambiguation {
                title: page_info.title,
                options,
            });
        }

        let (content, summary) =
            tokio::try_join!(self.extract(&page_info.title, false), self.extract(&page_info.title, true))?;

        let url = page_info
            .fullurl
            .ok_or_else(|| EncyclopediaError::InvalidResponse("page info without URL".to_string()))?;

        debug!(title = %page_info.title, content_chars = content.chars().count(), "Fetched page");
        Ok(Page::new(page_info.title, content, summary, url))
    }
}

fn unwrap_query<T>(response: QueryResponse<T>) -> Result<T, EncyclopediaError> {
    if let Some(error) = response.error {
        return Err(api_error(error));
    }
    response
        .query
        .ok_or_else(|| EncyclopediaError::InvalidResponse("response without query".to_string()))
}

fn api_error(error: ApiError) -> EncyclopediaError {
    match error.code.as_str() {
        "missingtitle" | "invalidtitle" => EncyclopediaError::PageMissing(error.info),
        _ => EncyclopediaError::InvalidResponse(format!("{}: {}", error.code, error.info)),
    }
}
