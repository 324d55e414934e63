//! Suggest command implementation.

use crate::config::Config;
use crate::format::Formatter;
use crate::kakaku::KakakuClient;
use crate::suggest::{CandidateSource, SuggestionService};
use anyhow::{Context, Result};

/// Lists product name suggestions for a category.
pub struct SuggestCommand {
    config: Config,
}

impl SuggestCommand {
    /// Creates a new suggest command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches suggestions and returns formatted output.
    pub async fn execute(&self, category: &str, query: &str) -> Result<String> {
        let client = KakakuClient::new(&self.config).context("Failed to create HTTP client")?;
        let service = SuggestionService::new(client);

        Ok(self.execute_with(&service, category, query).await)
    }

    /// Fetches suggestions from a provided service (for testing).
    pub async fn execute_with<S: CandidateSource>(
        &self,
        service: &SuggestionService<S>,
        category: &str,
        query: &str,
    ) -> String {
        let suggestions = service.suggest(category, query).await;
        Formatter::new(self.config.format).format_suggestions(category, &suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::config::OutputFormat;
    use crate::error::ScrapeError;
    use async_trait::async_trait;

    struct MockSource(Vec<&'static str>);

    #[async_trait]
    impl CandidateSource for MockSource {
        async fn candidates(&self, _c: Category, _q: &str) -> Result<Vec<String>, ScrapeError> {
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }
    }

    #[tokio::test]
    async fn test_suggest_command_filters() {
        let service = SuggestionService::new(MockSource(vec![
            "Samsung 990 PRO 2TB NVMe SSD",
            "USB cable",
        ]));
        let output = SuggestCommand::new(Config::default())
            .execute_with(&service, "storage", "990")
            .await;
        assert_eq!(output, " 1. Samsung 990 PRO 2TB NVMe SSD");
    }

    #[tokio::test]
    async fn test_suggest_command_popular_json() {
        let service = SuggestionService::new(MockSource(vec![]));
        let config = Config { format: OutputFormat::Json, ..Config::default() };
        let output = SuggestCommand::new(config).execute_with(&service, "cooler", "").await;

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["suggestions"], serde_json::json!(["Noctua NH-D15", "DeepCool AK620"]));
    }

    #[tokio::test]
    async fn test_suggest_command_unknown_category() {
        let service = SuggestionService::new(MockSource(vec!["anything"]));
        let output =
            SuggestCommand::new(Config::default()).execute_with(&service, "desk", "oak").await;
        assert_eq!(output, "No suggestions.");
    }
}
