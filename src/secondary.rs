//! One-shot scrapers for the secondary marketplaces.
//!
//! Each site is read with a single selector per field and only the first
//! listing counts; there is no price sorting. Results obey the same rules as
//! kakaku.com results (price range, image sentinel, merged specs).

use crate::category::Category;
use crate::config::Config;
use crate::error::ScrapeError;
use crate::html::stripped_text;
use crate::http::{HttpClient, BASIC_HEADERS};
use crate::market::MarketScraper;
use crate::models::{parse_price, SearchResult};
use crate::query;
use async_trait::async_trait;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

/// A secondary marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecondarySite {
    Rakuten,
    Amazon,
    GoogleShopping,
}

/// Per-site URL and selectors.
struct SiteLayout {
    search_url: &'static str,
    item: LazyLock<Selector>,
    name: LazyLock<Selector>,
    price: LazyLock<Selector>,
    image: LazyLock<Selector>,
}

macro_rules! selector {
    ($css:literal) => {
        LazyLock::new(|| Selector::parse($css).unwrap())
    };
}

static RAKUTEN: SiteLayout = SiteLayout {
    search_url: "https://search.rakuten.co.jp/search/mall/{}/",
    item: selector!(".searchresultitem"),
    name: selector!(".title"),
    price: selector!(".important"),
    image: selector!("img"),
};

static AMAZON: SiteLayout = SiteLayout {
    search_url: "https://www.amazon.co.jp/s?k={}",
    item: selector!("div[data-component-type='s-search-result']"),
    name: selector!("h2"),
    price: selector!(".a-price-whole"),
    image: selector!("img.s-image"),
};

static GOOGLE_SHOPPING: SiteLayout = SiteLayout {
    search_url: "https://www.google.com/search?tbm=shop&q={}",
    item: selector!(".sh-dgr__gr-auto"),
    name: selector!(".tAxDx"),
    price: selector!(".a8Pemb"),
    image: selector!("img"),
};

impl SecondarySite {
    /// Returns all secondary sites.
    pub fn all() -> &'static [SecondarySite] {
        &[SecondarySite::Rakuten, SecondarySite::Amazon, SecondarySite::GoogleShopping]
    }

    /// Returns the configuration name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SecondarySite::Rakuten => "rakuten",
            SecondarySite::Amazon => "amazon",
            SecondarySite::GoogleShopping => "googleshopping",
        }
    }

    /// Returns the label stored in [`SearchResult::source`].
    pub fn source(&self) -> &'static str {
        match self {
            SecondarySite::Rakuten => "楽天市場",
            SecondarySite::Amazon => "Amazon",
            SecondarySite::GoogleShopping => "Googleショッピング",
        }
    }

    fn layout(&self) -> &'static SiteLayout {
        match self {
            SecondarySite::Rakuten => &RAKUTEN,
            SecondarySite::Amazon => &AMAZON,
            SecondarySite::GoogleShopping => &GOOGLE_SHOPPING,
        }
    }

    /// Builds the production search URL; spaces become `+`.
    pub fn search_url(&self, query: &str) -> String {
        self.layout().search_url.replace("{}", &form_encode(query))
    }
}

impl fmt::Display for SecondarySite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecondarySite {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rakuten" => Ok(SecondarySite::Rakuten),
            "amazon" => Ok(SecondarySite::Amazon),
            "googleshopping" | "google" => Ok(SecondarySite::GoogleShopping),
            _ => Err(format!("Unknown site: {}. Use: rakuten, amazon, googleshopping", s)),
        }
    }
}

/// Percent-encodes a query for a query string, with `+` for spaces.
fn form_encode(query: &str) -> String {
    query.split(' ').map(urlencoding::encode).collect::<Vec<_>>().join("+")
}

fn path_and_query(url: &str) -> &str {
    let host_start = url.find("://").map_or(0, |i| i + 3);
    url[host_start..].find('/').map_or("", |i| &url[host_start + i..])
}

/// Scraper for one secondary marketplace.
pub struct SecondaryScraper {
    site: SecondarySite,
    http: HttpClient,
    base_url: Option<String>,
}

impl SecondaryScraper {
    /// Creates a new scraper using the secondary timeout.
    pub fn new(site: SecondarySite, config: &Config) -> Result<Self, ScrapeError> {
        Self::with_base_url(site, config, None)
    }

    /// Creates a new scraper sending requests to `base_url` (for testing).
    ///
    /// The production path and query string are kept; only scheme and host
    /// are replaced.
    pub fn with_base_url(
        site: SecondarySite,
        config: &Config,
        base_url: Option<String>,
    ) -> Result<Self, ScrapeError> {
        let http = HttpClient::new(config.secondary_timeout(), config.proxy.as_deref())?;
        Ok(Self { site, http, base_url: base_url.map(|u| u.trim_end_matches('/').to_string()) })
    }

    /// Returns the site this scraper reads.
    pub fn site(&self) -> SecondarySite {
        self.site
    }

    /// Builds the request URL for a query.
    pub fn search_url(&self, query: &str) -> String {
        let url = self.site.search_url(query);
        match &self.base_url {
            Some(base) => format!("{}{}", base, path_and_query(&url)),
            None => url,
        }
    }

    /// Reads the first listing of a result page.
    pub fn parse_first(&self, html: &str) -> Option<SearchResult> {
        let layout = self.site.layout();
        let document = Html::parse_document(html);

        let Some(item) = document.select(&layout.item).next() else {
            debug!("{}: no listing found", self.site);
            return None;
        };

        let name = item.select(&layout.name).next().map(stripped_text)?;
        let label = item.select(&layout.price).next().map(stripped_text)?;
        let Some(price) = parse_price(&label) else {
            debug!("{}: rejected price label '{}'", self.site, label);
            return None;
        };

        let image = item
            .select(&layout.image)
            .next()
            .and_then(|img| img.value().attr("src"))
            .filter(|src| src.starts_with("http"))
            .map(str::to_string);

        Some(SearchResult::new(price, name, self.site.source(), image))
    }
}

#[async_trait]
impl MarketScraper for SecondaryScraper {
    fn source(&self) -> &str {
        self.site.source()
    }

    async fn search(
        &self,
        product_name: &str,
        category: Option<Category>,
    ) -> Option<SearchResult> {
        let query = query::optimize(product_name, category);
        info!("Searching {}: {}", self.site, query);

        let html = match self.http.get_html(&self.search_url(&query), BASIC_HEADERS).await {
            Ok(html) => html,
            Err(e) => {
                warn!("{} search for '{}' failed: {:#}", self.site, query, anyhow::Error::new(e));
                return None;
            }
        };

        Some(self.parse_first(&html)?.with_specs(category))
    }
}
