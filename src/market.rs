//! The contract shared by every marketplace scraper.

use crate::category::Category;
use crate::models::SearchResult;
use async_trait::async_trait;

/// A marketplace that can be asked for the price of a product.
///
/// Implementations swallow their own failures: network errors, timeouts and
/// markup they cannot read are logged and reported as `None`.
#[async_trait]
pub trait MarketScraper: Send + Sync {
    /// Human-readable label stored in [`SearchResult::source`].
    fn source(&self) -> &str;

    /// Looks up `product_name`, merging specs for `category` when given.
    async fn search(&self, product_name: &str, category: Option<Category>)
        -> Option<SearchResult>;
}
