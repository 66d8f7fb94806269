//! MediaWiki Action API response types (`formatversion=2`)

use serde::Deserialize;

/// Top-level envelope shared by every `action=query` response
#[derive(Debug, Deserialize)]
pub(crate) struct QueryResponse<T> {
    pub query: Option<T>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    pub code: String,
    pub info: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PagesQuery {
    #[serde(default)]
    pub pages: Vec<PageInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageInfo {
    pub title: String,
    #[serde(default)]
    pub missing: bool,
    #[serde(default)]
    pub invalid: bool,
    pub fullurl: Option<String>,
    pub pageprops: Option<PageProps>,
    pub extract: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageProps {
    pub disambiguation: Option<String>,
}

impl PageInfo {
    pub fn is_disambiguation(&self) -> bool {
        self.pageprops
            .as_ref()
            .is_some_and(|p| p.disambiguation.is_some())
    }
}

impl PagesQuery {
    pub fn into_first_page(self) -> Option<PageInfo> {
        self.pages.into_iter().next()
    }
}

/// `action=parse` response
#[derive(Debug, Deserialize)]
pub(crate) struct ParseResponse {
    pub parse: Option<ParsedPage>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ParsedPage {
    pub text: String,
}
