//! kakaku.com scraper: cheapest-listing search and suggestion candidates.

use crate::category::Category;
use crate::config::Config;
use crate::error::ScrapeError;
use crate::http::{HttpClient, BROWSER_HEADERS, SUGGEST_HEADERS};
use crate::kakaku::parser::Parser;
use crate::kakaku::{BASE_URL, SOURCE};
use crate::market::MarketScraper;
use crate::models::SearchResult;
use crate::query;
use crate::suggest::CandidateSource;
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// kakaku.com client with browser impersonation.
pub struct KakakuClient {
    http: HttpClient,
    suggest_http: HttpClient,
    parser: Parser,
    base_url: String,
}

impl KakakuClient {
    /// Creates a new client from the configuration, honouring `base_url`.
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        Self::with_base_url(config, config.base_url.clone())
    }

    /// Creates a new client with an optional custom base URL (for testing).
    ///
    /// Searches use `timeout_secs`; suggestion lookups use the shorter
    /// `secondary_timeout_secs`.
    pub fn with_base_url(config: &Config, base_url: Option<String>) -> Result<Self, ScrapeError> {
        let base_url = base_url
            .as_deref()
            .unwrap_or(BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let http = HttpClient::new(config.timeout(), config.proxy.as_deref())?;
        let suggest_http = HttpClient::new(config.secondary_timeout(), config.proxy.as_deref())?;

        Ok(Self { http, suggest_http, parser: Parser::new(base_url.clone()), base_url })
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the price-ascending search URL for a query.
    pub fn search_url(&self, query: &str) -> String {
        format!("{}/search_results/{}/?sort=price_asc", self.base_url, urlencoding::encode(query))
    }

    /// Builds the category-scoped search URL used for suggestions.
    pub fn suggestion_url(&self, query: &str, category: Category) -> String {
        format!(
            "{}/search_results/{}/?category={}",
            self.base_url,
            urlencoding::encode(query),
            category.kakaku_code()
        )
    }
}

#[async_trait]
impl MarketScraper for KakakuClient {
    fn source(&self) -> &str {
        SOURCE
    }

    async fn search(
        &self,
        product_name: &str,
        category: Option<Category>,
    ) -> Option<SearchResult> {
        let query = query::optimize(product_name, category);
        info!(
            "Searching kakaku.com: {} (category: {})",
            query,
            category.map_or("none", |c| c.as_str())
        );

        let url = self.search_url(&query);
        let html = match self.http.get_html(&url, BROWSER_HEADERS).await {
            Ok(html) => html,
            Err(e) => {
                warn!(
                    "kakaku.com search for '{}' failed: {:#}",
                    query,
                    anyhow::Error::new(e)
                );
                return None;
            }
        };

        let Some(result) = self.parser.parse_cheapest(&html, &query) else {
            debug!("No usable listing at {}", url);
            return None;
        };

        let result = result.with_specs(category);
        info!("Cheapest on kakaku.com: ¥{} {}", result.price, result.product);
        Some(result)
    }
}

#[async_trait]
impl CandidateSource for KakakuClient {
    async fn candidates(&self, category: Category, query: &str) -> Result<Vec<String>, ScrapeError> {
        let url = self.suggestion_url(query, category);
        let html = self.suggest_http.get_html(&url, SUGGEST_HEADERS).await?;
        Ok(self.parser.parse_candidates(&html))
    }
}
