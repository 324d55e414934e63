//! Data models for scraped listings and price lookup results.

use crate::category::Category;
use crate::specs::{self, SpecMap};
use serde::{Deserialize, Serialize};

/// Image value used when a listing has no usable picture.
pub const NO_IMAGE: &str = "No image";

/// Lowest plausible listing price in yen; anything below is a parsing artefact.
pub const MIN_PRICE: u64 = 100;

/// Exclusive upper bound for a plausible listing price in yen.
pub const MAX_PRICE: u64 = 1_000_000_000;

/// Returns true if `price` falls inside the accepted listing range.
pub fn is_plausible_price(price: u64) -> bool {
    (MIN_PRICE..MAX_PRICE).contains(&price)
}

/// Parses a price label, keeping only its digits.
///
/// Returns `None` for labels without digits or with an implausible amount.
pub fn parse_price(text: &str) -> Option<u64> {
    let price = crate::html::digits(text).parse::<u64>().ok()?;
    is_plausible_price(price).then_some(price)
}

/// A priced listing found while scanning a result page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingCandidate<T> {
    /// Price in yen
    pub price: u64,
    /// Handle to the listing the price came from
    pub listing: T,
    /// Position of the listing on the page
    pub index: usize,
}

/// The cheapest listing found for a product, with inferred specifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Price in yen, as a decimal string
    pub price: String,
    /// Listing display name
    pub product: String,
    /// Label of the site the price came from
    pub source: String,
    /// Absolute image URL, or [`NO_IMAGE`]
    pub image: String,
    /// Model number; the display name is used as-is
    pub model_number: String,
    /// Category-specific attributes inferred from the display name
    #[serde(flatten)]
    pub specs: SpecMap,
}

impl SearchResult {
    /// Creates a result without specifications.
    pub fn new(
        price: u64,
        product: impl Into<String>,
        source: impl Into<String>,
        image: Option<String>,
    ) -> Self {
        let product = product.into();
        Self {
            price: price.to_string(),
            model_number: product.clone(),
            product,
            source: source.into(),
            image: image.unwrap_or_else(|| NO_IMAGE.to_string()),
            specs: SpecMap::new(),
        }
    }

    /// Merges the specs inferred from the display name for `category`.
    pub fn with_specs(mut self, category: Option<Category>) -> Self {
        if let Some(category) = category {
            self.specs.extend(specs::extract(category, &self.product));
        }
        self
    }

    /// Returns the price as a number.
    pub fn price_value(&self) -> Option<u64> {
        self.price.parse().ok()
    }

    /// Returns true if an image URL was found.
    pub fn has_image(&self) -> bool {
        self.image != NO_IMAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::Attribute;

    #[test]
    fn test_price_bounds() {
        assert!(!is_plausible_price(0));
        assert!(!is_plausible_price(99));
        assert!(is_plausible_price(100));
        assert!(is_plausible_price(999_999_999));
        assert!(!is_plausible_price(1_000_000_000));
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("¥12,345"), Some(12345));
        assert_eq!(parse_price("最安価格(税込):¥100～"), Some(100));
        assert_eq!(parse_price("¥50"), None);
        assert_eq!(parse_price("¥1,500,000,000"), None);
        assert_eq!(parse_price("価格情報なし"), None);
        assert_eq!(parse_price("99999999999999999999999"), None);
    }

    #[test]
    fn test_search_result_new() {
        let result = SearchResult::new(4980, "Ryzen 5 5600", "価格.com（最安値）", None);
        assert_eq!(result.price, "4980");
        assert_eq!(result.price_value(), Some(4980));
        assert_eq!(result.model_number, "Ryzen 5 5600");
        assert_eq!(result.image, NO_IMAGE);
        assert!(!result.has_image());
        assert!(result.specs.is_empty());
    }

    #[test]
    fn test_with_specs_uses_display_name() {
        let result = SearchResult::new(7980, "Intel Core i5-12400F", "価格.com（最安値）", None)
            .with_specs(Some(Category::Cpu));
        assert_eq!(result.specs.get(&Attribute::Socket).map(String::as_str), Some("LGA1700"));

        let plain = SearchResult::new(7980, "Intel Core i5-12400F", "価格.com（最安値）", None)
            .with_specs(None);
        assert!(plain.specs.is_empty());
    }

    #[test]
    fn test_search_result_json_shape() {
        let mut result = SearchResult::new(
            12800,
            "Corsair RM850e 850W",
            "価格.com（最安値）",
            Some("https://img.example.com/psu.jpg".to_string()),
        );
        result.specs.insert(Attribute::Wattage, "850W".to_string());

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["price"], "12800");
        assert_eq!(value["product"], "Corsair RM850e 850W");
        assert_eq!(value["modelNumber"], "Corsair RM850e 850W");
        assert_eq!(value["image"], "https://img.example.com/psu.jpg");
        assert_eq!(value["wattage"], "850W");
        assert!(value.get("specs").is_none());
    }
}
