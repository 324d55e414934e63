//! Search command implementation.

use crate::category::Category;
use crate::config::Config;
use crate::format::Formatter;
use crate::search::PriceSearch;
use anyhow::{Context, Result};
use tracing::info;

/// Executes a price search.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the search and returns formatted output.
    pub async fn execute(&self, product_name: &str, category: Option<Category>) -> Result<String> {
        let search =
            PriceSearch::from_config(&self.config).context("Failed to create HTTP client")?;

        self.execute_with(&search, product_name, category).await
    }

    /// Executes the search with a provided orchestrator (for testing).
    pub async fn execute_with(
        &self,
        search: &PriceSearch,
        product_name: &str,
        category: Option<Category>,
    ) -> Result<String> {
        info!("Looking up price for: {}", product_name);

        let result = search.search(product_name, category).await?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_result(&result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::SearchError;
    use crate::market::MarketScraper;
    use crate::models::SearchResult;
    use async_trait::async_trait;

    /// Mock scraper for testing.
    struct MockScraper {
        result: Option<SearchResult>,
    }

    #[async_trait]
    impl MarketScraper for MockScraper {
        fn source(&self) -> &str {
            "mock"
        }

        async fn search(&self, _name: &str, category: Option<Category>) -> Option<SearchResult> {
            self.result.clone().map(|r| r.with_specs(category))
        }
    }

    fn search_with(result: Option<SearchResult>) -> PriceSearch {
        PriceSearch::new(MockScraper { result })
    }

    fn make_result() -> SearchResult {
        SearchResult::new(26800, "Samsung 990 PRO 2TB NVMe", "価格.com（最安値）", None)
    }

    #[tokio::test]
    async fn test_search_command_table() {
        let cmd = SearchCommand::new(Config::default());
        let output = cmd
            .execute_with(&search_with(Some(make_result())), "990 PRO", Some(Category::Storage))
            .await
            .unwrap();

        assert!(output.contains("Samsung 990 PRO 2TB NVMe"));
        assert!(output.contains("¥26,800"));
        assert!(output.contains("type:        NVMe SSD"));
        assert!(output.contains("capacity:    2TB"));
    }

    #[tokio::test]
    async fn test_search_command_json_format() {
        let config = Config { format: OutputFormat::Json, ..Config::default() };
        let cmd = SearchCommand::new(config);
        let output =
            cmd.execute_with(&search_with(Some(make_result())), "990 PRO", None).await.unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["price"], "26800");
        assert_eq!(value["source"], "価格.com（最安値）");
    }

    #[tokio::test]
    async fn test_search_command_not_found() {
        let cmd = SearchCommand::new(Config::default());
        let err = cmd.execute_with(&search_with(None), "nothing", None).await.unwrap_err();

        assert!(matches!(err.downcast_ref::<SearchError>(), Some(SearchError::NotFound(_))));
        assert!(err.to_string().contains("no price found"));
    }

    #[tokio::test]
    async fn test_search_command_blank_name() {
        let cmd = SearchCommand::new(Config::default());
        let err = cmd.execute_with(&search_with(Some(make_result())), " ", None).await.unwrap_err();
        assert!(matches!(err.downcast_ref::<SearchError>(), Some(SearchError::MissingProductName)));
    }
}
