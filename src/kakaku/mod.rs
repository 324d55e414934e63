//! kakaku.com, the price-comparison site used as the primary price source.

pub mod client;
pub mod parser;
pub mod selectors;

pub use client::KakakuClient;
pub use parser::Parser;

/// Production base URL.
pub const BASE_URL: &str = "https://kakaku.com";

/// Source label attached to results.
pub const SOURCE: &str = "価格.com（最安値）";
