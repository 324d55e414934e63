//! CSS selectors for kakaku.com result pages.
//!
//! Each chain lists selectors from the current markup to older or more
//! generic ones. Update the chains here when the site changes its HTML and
//! add a fixture to the parser tests.

use crate::html::SelectorChain;
use std::sync::LazyLock;

/// Selectors for the price-sorted search results page.
pub mod search {
    use super::*;

    /// Listing container.
    pub static ITEM: LazyLock<SelectorChain> = LazyLock::new(|| {
        SelectorChain::new(&[".p-item", "li.item", "[data-item]", ".productlist_item"])
    });

    /// Price label inside a listing.
    pub static PRICE: LazyLock<SelectorChain> = LazyLock::new(|| {
        SelectorChain::new(&[".p-item_price", ".item_price", ".price", "span.priceTxt", ".pryen"])
    });

    /// Display name inside a listing.
    pub static NAME: LazyLock<SelectorChain> = LazyLock::new(|| {
        SelectorChain::new(&[".p-item_name", ".item_name", "h3", "a", ".productName"])
    });

    /// Listing image.
    pub static IMAGE: LazyLock<SelectorChain> = LazyLock::new(|| {
        SelectorChain::new(&["img.p-item_image", "img.lazy", "img[data-original]", "img"])
    });

    /// Image attributes, lazy-load attributes before plain `src`.
    pub const IMAGE_ATTRS: &[&str] = &["data-original", "data-src", "data-lazy-src", "src"];

    /// Substrings marking a placeholder rather than a product picture.
    pub const PLACEHOLDER_MARKERS: &[&str] = &["noimage", "placeholder", "loading", "1x1"];
}

/// Selectors for the category-scoped search used by suggestions.
pub mod suggest {
    use super::*;

    /// Links whose text is a candidate product name.
    pub static CANDIDATE: LazyLock<SelectorChain> = LazyLock::new(|| {
        SelectorChain::new(&[
            "div.p-item_name a",
            "li.item a",
            "a.ckitanker",
            "div[class*='item'] a, td.ckitanker a",
        ])
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chains_compile() {
        assert_eq!(search::ITEM.sources().count(), 4);
        assert_eq!(search::PRICE.sources().count(), 5);
        assert_eq!(search::NAME.sources().count(), 5);
        assert_eq!(search::IMAGE.sources().count(), 4);
        assert_eq!(suggest::CANDIDATE.sources().count(), 4);
    }

    #[test]
    fn test_image_attrs_prefer_lazy_load() {
        assert_eq!(search::IMAGE_ATTRS.last(), Some(&"src"));
    }
}
