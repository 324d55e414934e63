//! Price search orchestration across marketplace scrapers.

use crate::category::Category;
use crate::config::Config;
use crate::error::{ScrapeError, SearchError};
use crate::kakaku::KakakuClient;
use crate::market::MarketScraper;
use crate::models::SearchResult;
use crate::secondary::SecondaryScraper;
use tracing::{debug, info};

/// Looks up a product price, asking each scraper in order until one answers.
///
/// Built from the default configuration this holds kakaku.com alone.
pub struct PriceSearch {
    scrapers: Vec<Box<dyn MarketScraper>>,
}

impl PriceSearch {
    /// Creates a search backed by a single primary scraper.
    pub fn new(primary: impl MarketScraper + 'static) -> Self {
        Self { scrapers: vec![Box::new(primary)] }
    }

    /// Appends a scraper consulted after the existing ones.
    pub fn with_fallback(mut self, scraper: impl MarketScraper + 'static) -> Self {
        self.scrapers.push(Box::new(scraper));
        self
    }

    /// Builds the kakaku.com scraper plus any configured secondary sites.
    pub fn from_config(config: &Config) -> Result<Self, ScrapeError> {
        let mut search = Self::new(KakakuClient::new(config)?);
        for site in &config.fallback {
            debug!("Adding fallback site: {}", site);
            search = search.with_fallback(SecondaryScraper::new(*site, config)?);
        }
        Ok(search)
    }

    /// Returns the source labels of the scrapers, in the order they are asked.
    pub fn sources(&self) -> Vec<&str> {
        self.scrapers.iter().map(|s| s.source()).collect()
    }

    /// Finds the price of `product_name`.
    ///
    /// Fails with [`SearchError::MissingProductName`] for a blank name and
    /// with [`SearchError::NotFound`] when no scraper produces a result.
    pub async fn search(
        &self,
        product_name: &str,
        category: Option<Category>,
    ) -> Result<SearchResult, SearchError> {
        let product_name = product_name.trim();
        if product_name.is_empty() {
            return Err(SearchError::MissingProductName);
        }

        info!(
            "Price search: {} (category: {})",
            product_name,
            category.map_or("none", |c| c.as_str())
        );

        for scraper in &self.scrapers {
            if let Some(result) = scraper.search(product_name, category).await {
                info!("Price found on {}: ¥{}", scraper.source(), result.price);
                return Ok(result);
            }
            debug!("No result from {}", scraper.source());
        }

        Err(SearchError::NotFound(product_name.to_string()))
    }
}
