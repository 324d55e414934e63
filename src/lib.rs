//! parts-price - Lowest-price and spec lookup for PC parts
//!
//! Finds the cheapest listing for a part on kakaku.com, infers its key
//! specifications from the listing name, and suggests product names per
//! category. Requests use TLS fingerprint emulation.

pub mod api;
pub mod category;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod html;
pub mod http;
pub mod kakaku;
pub mod market;
pub mod models;
pub mod query;
pub mod search;
pub mod secondary;
pub mod specs;
pub mod suggest;

pub use category::Category;
pub use config::Config;
pub use error::{ScrapeError, SearchError};
pub use market::MarketScraper;
pub use models::SearchResult;
pub use search::PriceSearch;
pub use specs::{Attribute, SpecMap};
pub use suggest::SuggestionService;
