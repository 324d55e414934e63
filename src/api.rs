//! JSON request and reply shapes for the search and suggestion endpoints.
//!
//! Handlers map outcomes to a status code and body; serving them over HTTP
//! is left to the embedding application.

use crate::category::Category;
use crate::error::SearchError;
use crate::search::PriceSearch;
use crate::suggest::{CandidateSource, SuggestionService};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Reply text for a missing product name.
pub const MISSING_NAME_MESSAGE: &str = "商品名が必要です";

/// Reply text when no price could be found.
pub const NOT_FOUND_MESSAGE: &str = "価格.comで価格を取得できませんでした";

/// Body of a search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Body of a suggestion request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub query: String,
}

/// Error reply body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Suggestion reply body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<String>,
}

/// A status code with a JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiReply {
    pub status: u16,
    pub body: Value,
}

impl ApiReply {
    fn json(status: u16, body: impl Serialize) -> Self {
        let body = serde_json::to_value(body).unwrap_or(Value::Null);
        Self { status, body }
    }

    /// Creates an error reply.
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self::json(status, ErrorBody { error: message.into() })
    }

    /// Returns true for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl From<SearchError> for ApiReply {
    fn from(error: SearchError) -> Self {
        match error {
            SearchError::MissingProductName => ApiReply::error(400, MISSING_NAME_MESSAGE),
            SearchError::NotFound(_) => ApiReply::error(404, NOT_FOUND_MESSAGE),
        }
    }
}

/// Handles a search request: 200 with the result, 400 or 404 otherwise.
///
/// A missing, null or unrecognised category searches without spec inference.
pub async fn search(price_search: &PriceSearch, request: SearchRequest) -> ApiReply {
    let category = request.category.as_deref().and_then(|name| match name.parse::<Category>() {
        Ok(category) => Some(category),
        Err(_) => {
            debug!("Searching without specs for category '{}'", name);
            None
        }
    });

    let product_name = request.product_name.unwrap_or_default();
    match price_search.search(&product_name, category).await {
        Ok(result) => ApiReply::json(200, result),
        Err(e) => e.into(),
    }
}

/// Handles a suggestion request. Always answers 200.
pub async fn suggestions<S: CandidateSource>(
    service: &SuggestionService<S>,
    request: SuggestionRequest,
) -> ApiReply {
    let suggestions = service.suggest(&request.category, &request.query).await;
    ApiReply::json(200, SuggestionResponse { suggestions })
}
