//! Product name suggestions for a category.

use crate::category::Category;
use crate::error::ScrapeError;
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Maximum number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 8;

/// Queries shorter than this (in characters) get the popular list instead.
pub const MIN_QUERY_CHARS: usize = 2;

/// Source of raw candidate names - enables mocking for tests.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Fetches unfiltered product names for `query` within `category`.
    async fn candidates(&self, category: Category, query: &str)
        -> Result<Vec<String>, ScrapeError>;
}

/// Suggests product names as the user types.
pub struct SuggestionService<S> {
    source: S,
}

impl<S: CandidateSource> SuggestionService<S> {
    /// Creates a new service reading candidates from `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns at most [`MAX_SUGGESTIONS`] names for `query` in `category`.
    ///
    /// Never fails: an unknown category or a failed fetch gives an empty list.
    pub async fn suggest(&self, category: &str, query: &str) -> Vec<String> {
        let Ok(category) = category.parse::<Category>() else {
            debug!("No suggestions for unknown category '{}'", category);
            return Vec::new();
        };

        let query = query.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            debug!("Short query, returning popular {} items", category);
            return popular(category);
        }

        info!("Fetching suggestions: {} (category: {})", query, category);
        match self.source.candidates(category, query).await {
            Ok(candidates) => {
                let suggestions = filter_candidates(category, &candidates);
                debug!("Kept {} of {} candidates", suggestions.len(), candidates.len());
                suggestions
            }
            Err(e) => {
                warn!("Suggestion lookup for '{}' failed: {:#}", query, anyhow::Error::new(e));
                Vec::new()
            }
        }
    }
}

/// The static example list for a category, truncated to [`MAX_SUGGESTIONS`].
pub fn popular(category: Category) -> Vec<String> {
    category.popular_items().iter().take(MAX_SUGGESTIONS).map(|s| s.to_string()).collect()
}

/// Filters raw candidates, preserving page order.
///
/// A candidate is dropped when it contains an exclude keyword (exact
/// substring), when the category has allow keywords and none appears
/// (case-insensitive), when it repeats an earlier one, or when it is three
/// characters or shorter.
pub fn filter_candidates(category: Category, candidates: &[String]) -> Vec<String> {
    let keywords: Vec<String> =
        category.suggestion_keywords().iter().map(|k| k.to_lowercase()).collect();
    let excludes = category.suggestion_excludes();

    let mut suggestions: Vec<String> = Vec::new();
    for name in candidates {
        if let Some(exclude) = excludes.iter().find(|e| name.contains(*e)) {
            debug!("Excluded (contains '{}'): {}", exclude, name);
            continue;
        }

        let lower = name.to_lowercase();
        let relevant = keywords.is_empty() || keywords.iter().any(|k| lower.contains(k.as_str()));

        if relevant && name.chars().count() > 3 && !suggestions.contains(name) {
            suggestions.push(name.clone());
            if suggestions.len() == MAX_SUGGESTIONS {
                break;
            }
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock candidate source for testing.
    struct MockSource {
        candidates: Option<Vec<String>>,
        calls: AtomicUsize,
    }

    impl MockSource {
        fn with(names: &[&str]) -> Self {
            Self {
                candidates: Some(names.iter().map(|s| s.to_string()).collect()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self { candidates: None, calls: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl CandidateSource for MockSource {
        async fn candidates(
            &self,
            _category: Category,
            _query: &str,
        ) -> Result<Vec<String>, ScrapeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.candidates.clone().ok_or(ScrapeError::Status(503))
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_gpu_excludes_golf_even_with_allow_keyword() {
        let candidates = names(&[
            "ゴルフ ウェッジ RTX シャフト",
            "Golf club RTX edition",
            "ASUS GeForce RTX 4070 SUPER",
        ]);
        assert_eq!(
            filter_candidates(Category::Gpu, &candidates),
            vec!["ASUS GeForce RTX 4070 SUPER"]
        );
    }

    #[test]
    fn test_exclude_is_case_sensitive() {
        // "golf" does not match the "Golf" exclude keyword
        let candidates = names(&["golf RTX"]);
        assert_eq!(filter_candidates(Category::Gpu, &candidates), vec!["golf RTX"]);
    }

    #[test]
    fn test_allow_keywords_case_insensitive() {
        let candidates = names(&["intel core i5-14400f", "Mouse pad XL"]);
        assert_eq!(filter_candidates(Category::Cpu, &candidates), vec!["intel core i5-14400f"]);
    }

    #[test]
    fn test_duplicates_and_short_names_dropped() {
        let candidates = names(&["AMD", "Ryzen 7 7800X3D", "Ryzen 7 7800X3D", "CPU"]);
        assert_eq!(filter_candidates(Category::Cpu, &candidates), vec!["Ryzen 7 7800X3D"]);
    }

    #[test]
    fn test_filter_caps_at_eight() {
        let candidates: Vec<String> = (0..10).map(|i| format!("DDR5-{} 32GB", 4800 + i)).collect();
        let kept = filter_candidates(Category::Memory, &candidates);
        assert_eq!(kept.len(), MAX_SUGGESTIONS);
        assert_eq!(kept[0], "DDR5-4800 32GB");
        assert_eq!(kept[7], "DDR5-4807 32GB");
    }

    #[test]
    fn test_popular_truncated() {
        for category in Category::all() {
            let items = popular(*category);
            assert!(!items.is_empty());
            assert!(items.len() <= MAX_SUGGESTIONS);
        }
        assert_eq!(popular(Category::Os), vec!["Windows 11 Home", "Windows 11 Pro"]);
    }

    #[tokio::test]
    async fn test_unknown_category_is_empty() {
        let service = SuggestionService::new(MockSource::with(&["Intel Core i9-14900K"]));
        assert!(service.suggest("monitor", "Dell").await.is_empty());
        assert_eq!(service.source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_short_query_returns_popular_without_fetch() {
        let service = SuggestionService::new(MockSource::with(&["ignored"]));

        let suggestions = service.suggest("cpu", " R ").await;
        assert_eq!(suggestions, popular(Category::Cpu));

        let suggestions = service.suggest("cpu", "").await;
        assert_eq!(suggestions, popular(Category::Cpu));
        assert_eq!(service.source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_two_character_query_fetches() {
        let service = SuggestionService::new(MockSource::with(&["Intel Core i9-14900K"]));
        let suggestions = service.suggest("cpu", "i9").await;
        assert_eq!(suggestions, vec!["Intel Core i9-14900K"]);
        assert_eq!(service.source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_japanese_two_character_query_fetches() {
        let service = SuggestionService::new(MockSource::with(&["CPUクーラー 虎徹"]));
        let suggestions = service.suggest("cooler", "虎徹").await;
        assert_eq!(suggestions, vec!["CPUクーラー 虎徹"]);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_empty() {
        let service = SuggestionService::new(MockSource::failing());
        assert!(service.suggest("gpu", "RTX").await.is_empty());
    }
}
