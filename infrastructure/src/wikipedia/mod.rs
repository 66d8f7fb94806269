//! Wikipedia adapter
//!
//! Implements [`EncyclopediaGateway`](wikibot_application::EncyclopediaGateway)
//! on top of the MediaWiki Action API.

mod api;
mod disambiguation;
pub mod gateway;

pub use gateway::WikipediaGateway;
