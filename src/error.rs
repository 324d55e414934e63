//! Error types for price lookups and scraping.

use std::time::Duration;
use thiserror::Error;

/// Errors surfaced to callers of a price search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The product name was missing or blank.
    #[error("product name is required")]
    MissingProductName,

    /// No scraper produced a usable price.
    #[error("no price found for '{0}'")]
    NotFound(String),
}

/// Transient failures while fetching or reading a marketplace page.
///
/// Scrapers log these and report "no result"; they never reach callers.
/// Log them through [`anyhow::Error`] with `{:#}` so every cause is kept.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request failed")]
    Request(#[from] wreq::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("unexpected status: {0}")]
    Status(u16),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}
