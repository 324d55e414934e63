//! HTML helpers shared by the marketplace parsers.

use scraper::{ElementRef, Selector};
use tracing::trace;

/// Ordered selector fallbacks, evaluated lazily until one matches.
pub struct SelectorChain {
    selectors: Vec<(&'static str, Selector)>,
}

impl SelectorChain {
    /// Compiles a chain from constant selector strings.
    ///
    /// Panics on an invalid selector, so only call this with literals.
    pub fn new(sources: &[&'static str]) -> Self {
        let selectors = sources.iter().map(|s| (*s, Selector::parse(s).unwrap())).collect();
        Self { selectors }
    }

    /// Returns every match of the first selector that matches anything.
    pub fn select_all<'a>(&self, root: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        for (source, selector) in &self.selectors {
            let found: Vec<_> = root.select(selector).collect();
            if !found.is_empty() {
                trace!("Selector '{}' matched {} elements", source, found.len());
                return found;
            }
            trace!("Selector '{}' matched nothing", source);
        }
        Vec::new()
    }

    /// Returns the first match of the first selector that matches anything.
    pub fn select_first<'a>(&self, root: ElementRef<'a>) -> Option<ElementRef<'a>> {
        self.selectors.iter().find_map(|(_, selector)| root.select(selector).next())
    }

    /// Returns the selector sources in evaluation order.
    pub fn sources(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.selectors.iter().map(|(source, _)| *source)
    }
}

/// Returns the element's text with each text node trimmed and blanks dropped.
pub fn stripped_text(element: ElementRef) -> String {
    element.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// Returns the first non-empty attribute among `names`, in order.
pub fn first_attr<'a>(element: ElementRef<'a>, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .filter_map(|name| element.value().attr(name))
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// Keeps only the ASCII digits of a price label such as "¥12,345～".
pub fn digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}
