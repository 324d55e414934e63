//! API command: runs a JSON endpoint handler once and prints its reply.

use crate::api::{self, ApiReply, SearchRequest, SuggestionRequest};
use crate::config::Config;
use crate::kakaku::KakakuClient;
use crate::search::PriceSearch;
use crate::suggest::SuggestionService;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Endpoint handled by the API command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Endpoint {
    /// Price search (`{"productName", "category"}`)
    Search,
    /// Suggestions (`{"category", "query"}`)
    Suggestions,
}

/// Executes an endpoint handler against a JSON request body.
pub struct ApiCommand {
    config: Config,
}

impl ApiCommand {
    /// Creates a new API command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Handles `body` and returns the reply.
    ///
    /// A malformed body yields a 400 reply rather than an error.
    pub async fn execute(&self, endpoint: Endpoint, body: &str) -> Result<ApiReply> {
        debug!("API {:?} request: {}", endpoint, body);

        match endpoint {
            Endpoint::Search => {
                let request: SearchRequest = match parse_body(body) {
                    Ok(request) => request,
                    Err(reply) => return Ok(reply),
                };
                let search = PriceSearch::from_config(&self.config)
                    .context("Failed to create HTTP client")?;
                Ok(api::search(&search, request).await)
            }
            Endpoint::Suggestions => {
                let request: SuggestionRequest = match parse_body(body) {
                    Ok(request) => request,
                    Err(reply) => return Ok(reply),
                };
                let client =
                    KakakuClient::new(&self.config).context("Failed to create HTTP client")?;
                Ok(api::suggestions(&SuggestionService::new(client), request).await)
            }
        }
    }
}

/// Parses a JSON body; an empty body counts as `{}`.
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiReply> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body).map_err(|e| ApiReply::error(400, format!("invalid JSON body: {}", e)))
}

/// Renders a reply as pretty JSON `{"status": ..., "body": ...}`.
pub fn render(reply: &ApiReply) -> String {
    serde_json::to_string_pretty(reply).unwrap_or_else(|_| reply.body.to_string())
}
