//! HTML parser for kakaku.com search result pages.

use crate::html::{first_attr, stripped_text};
use crate::kakaku::selectors::{search, suggest};
use crate::kakaku::SOURCE;
use crate::models::{parse_price, ListingCandidate, SearchResult, NO_IMAGE};
use scraper::{ElementRef, Html};
use tracing::{debug, trace};

/// Maximum number of raw suggestion candidates read from a page.
pub const MAX_CANDIDATES: usize = 10;

/// Parser for kakaku.com HTML pages.
pub struct Parser {
    base_url: String,
}

impl Parser {
    /// Creates a new parser resolving root-relative URLs against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    /// Finds the cheapest listing on a price-sorted search page.
    ///
    /// Listings whose price cannot be read or is out of range are skipped.
    /// Returns `None` when no listing carries a valid price. Specs are not
    /// merged here.
    pub fn parse_cheapest(&self, html: &str, query: &str) -> Option<SearchResult> {
        let document = Html::parse_document(html);

        let items = search::ITEM.select_all(document.root_element());
        if items.is_empty() {
            debug!("No listings found for '{}'", query);
            return None;
        }
        debug!("Found {} listings", items.len());

        let mut candidates: Vec<ListingCandidate<ElementRef>> = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, listing)| self.price_candidate(index, listing))
            .collect();

        if candidates.is_empty() {
            debug!("No listing had a valid price");
            return None;
        }

        // Stable sort: the earliest listing wins a tie.
        candidates.sort_by_key(|candidate| candidate.price);
        let best = candidates[0];
        debug!(
            "Cheapest of {} priced listings: index {} at ¥{}",
            candidates.len(),
            best.index,
            best.price
        );

        let name = search::NAME
            .select_first(best.listing)
            .map(stripped_text)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| {
                debug!("No listing name found, using the query");
                query.to_string()
            });

        let image = search::IMAGE
            .select_first(best.listing)
            .and_then(|img| first_attr(img, search::IMAGE_ATTRS))
            .map(|raw| self.normalize_image_url(raw));

        Some(SearchResult::new(best.price, name, SOURCE, image))
    }

    fn price_candidate<'a>(
        &self,
        index: usize,
        listing: ElementRef<'a>,
    ) -> Option<ListingCandidate<ElementRef<'a>>> {
        let label = stripped_text(search::PRICE.select_first(listing)?);
        match parse_price(&label) {
            Some(price) => {
                trace!("[{}] price ¥{}", index, price);
                Some(ListingCandidate { price, listing, index })
            }
            None => {
                trace!("[{}] rejected price label '{}'", index, label);
                None
            }
        }
    }

    /// Makes an image URL absolute, or returns [`NO_IMAGE`] for placeholders
    /// and anything that is not an http(s) URL.
    pub fn normalize_image_url(&self, raw: &str) -> String {
        let url = if raw.starts_with("http") {
            raw.to_string()
        } else if raw.starts_with("//") {
            format!("https:{}", raw)
        } else if raw.starts_with('/') {
            format!("{}{}", self.base_url, raw)
        } else {
            raw.to_string()
        };

        let lower = url.to_lowercase();
        if search::PLACEHOLDER_MARKERS.iter().any(|marker| lower.contains(marker)) {
            debug!("Placeholder image ignored: {}", url);
            return NO_IMAGE.to_string();
        }

        if !url.starts_with("http") {
            return NO_IMAGE.to_string();
        }

        url
    }

    /// Reads up to [`MAX_CANDIDATES`] product names from a search page, in
    /// page order. Names are not filtered.
    pub fn parse_candidates(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);

        let candidates: Vec<String> = suggest::CANDIDATE
            .select_all(document.root_element())
            .into_iter()
            .take(MAX_CANDIDATES)
            .map(|link| clean_candidate(&stripped_text(link)))
            .collect();

        debug!("Read {} suggestion candidates", candidates.len());
        candidates
    }
}

fn clean_candidate(name: &str) -> String {
    name.replace('\n', " ").replace("  ", " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> Parser {
        Parser::new("https://kakaku.com")
    }

    fn listing(price: &str, name: &str) -> String {
        format!(
            r#"<div class="p-item">
                <p class="p-item_name">{}</p>
                <p class="p-item_price"><span>¥{}</span></p>
            </div>"#,
            name, price
        )
    }

    #[test]
    fn test_picks_lowest_valid_price() {
        let html = format!(
            "<html><body>{}{}{}{}</body></html>",
            listing("5,000", "Middle"),
            listing("100", "Cheapest"),
            listing("1,500,000,000", "Too expensive"),
            listing("50", "Too cheap"),
        );

        let result = parser().parse_cheapest(&html, "query").unwrap();
        assert_eq!(result.price, "100");
        assert_eq!(result.product, "Cheapest");
        assert_eq!(result.model_number, "Cheapest");
        assert_eq!(result.source, SOURCE);
    }

    #[test]
    fn test_tie_keeps_first_listing() {
        let html = format!("{}{}", listing("9,980", "First"), listing("9,980", "Second"));
        let result = parser().parse_cheapest(&html, "query").unwrap();
        assert_eq!(result.product, "First");
    }

    #[test]
    fn test_skips_listing_without_price() {
        let html = r#"
            <div class="p-item"><p class="p-item_name">No price</p></div>
            <div class="p-item"><p class="p-item_name">Priced</p><span class="price">¥3,480</span></div>
        "#;
        let result = parser().parse_cheapest(html, "query").unwrap();
        assert_eq!(result.product, "Priced");
        assert_eq!(result.price, "3480");
    }

    #[test]
    fn test_no_listings() {
        assert!(parser().parse_cheapest("<html><body><p>0件</p></body></html>", "x").is_none());
    }

    #[test]
    fn test_no_valid_prices() {
        let html = format!("{}{}", listing("50", "a"), listing("価格未定", "b"));
        assert!(parser().parse_cheapest(&html, "x").is_none());
    }

    #[test]
    fn test_fallback_item_selector() {
        let html = r#"<ul>
            <li class="item"><h3>Older markup</h3><span class="item_price">¥12,800</span></li>
        </ul>"#;
        let result = parser().parse_cheapest(html, "x").unwrap();
        assert_eq!(result.product, "Older markup");
        assert_eq!(result.price, "12800");
    }

    #[test]
    fn test_name_falls_back_to_query() {
        let html = r#"<div class="p-item"><span class="pryen">¥4,200</span></div>"#;
        let result = parser().parse_cheapest(html, "WD Blue SN580 1TB").unwrap();
        assert_eq!(result.product, "WD Blue SN580 1TB");

        let html = r#"<div class="p-item"><h3> </h3><span class="pryen">¥4,200</span></div>"#;
        let result = parser().parse_cheapest(html, "WD Blue SN580 1TB").unwrap();
        assert_eq!(result.product, "WD Blue SN580 1TB");
    }

    #[test]
    fn test_image_from_lazy_attribute() {
        let html = r#"<div class="p-item">
            <img class="p-item_image" src="/img/loading.gif" data-original="//img1.kakaku.k-img.com/images/productimage/m/K0001.jpg">
            <p class="p-item_name">RTX 4070</p>
            <p class="p-item_price">¥89,800</p>
        </div>"#;
        let result = parser().parse_cheapest(html, "x").unwrap();
        assert_eq!(result.image, "https://img1.kakaku.k-img.com/images/productimage/m/K0001.jpg");
    }

    #[test]
    fn test_missing_image_uses_sentinel() {
        let html = listing("1,000", "No picture");
        let result = parser().parse_cheapest(&html, "x").unwrap();
        assert_eq!(result.image, NO_IMAGE);
    }

    #[test]
    fn test_normalize_image_url() {
        let p = parser();
        assert_eq!(p.normalize_image_url("//img.example.com/x.jpg"), "https://img.example.com/x.jpg");
        assert_eq!(p.normalize_image_url("/images/x.jpg"), "https://kakaku.com/images/x.jpg");
        assert_eq!(
            p.normalize_image_url("https://img.example.com/x.jpg"),
            "https://img.example.com/x.jpg"
        );
        assert_eq!(p.normalize_image_url("https://img.example.com/noimage.gif"), NO_IMAGE);
        assert_eq!(p.normalize_image_url("//img.example.com/NoImage_L.png"), NO_IMAGE);
        assert_eq!(p.normalize_image_url("https://img.example.com/1x1.gif"), NO_IMAGE);
        assert_eq!(p.normalize_image_url("data:image/gif;base64,R0lGOD"), NO_IMAGE);
        assert_eq!(p.normalize_image_url("images/x.jpg"), NO_IMAGE);
    }

    #[test]
    fn test_root_relative_uses_base_url() {
        let p = Parser::new("http://127.0.0.1:8080/");
        assert_eq!(p.normalize_image_url("/a.jpg"), "http://127.0.0.1:8080/a.jpg");
    }

    #[test]
    fn test_parse_candidates() {
        let html = r#"
            <div class="p-item_name"><a href="/item/1">GeForce RTX 4070 SUPER</a></div>
            <div class="p-item_name"><a href="/item/2"> Radeon <b>RX 7800 XT</b> </a></div>
        "#;
        let candidates = parser().parse_candidates(html);
        assert_eq!(candidates, vec!["GeForce RTX 4070 SUPER", "RadeonRX 7800 XT"]);
    }

    #[test]
    fn test_parse_candidates_fallback_and_limit() {
        let links: String =
            (0..15).map(|i| format!(r#"<a class="ckitanker">Core i5-{}</a>"#, i)).collect();
        let candidates = parser().parse_candidates(&links);
        assert_eq!(candidates.len(), MAX_CANDIDATES);
        assert_eq!(candidates[0], "Core i5-0");
    }

    #[test]
    fn test_parse_candidates_generic_selector() {
        let html = r#"<table><tr><td class="ckitanker"><a>Windows 11 Pro</a></td></tr></table>"#;
        assert_eq!(parser().parse_candidates(html), vec!["Windows 11 Pro"]);
    }

    #[test]
    fn test_clean_candidate() {
        assert_eq!(clean_candidate(" Noctua\nNH-D15 "), "Noctua NH-D15");
        assert_eq!(clean_candidate("a  b"), "a b");
    }
}
