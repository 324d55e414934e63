//! Operating system edition and license.

use super::{first_keyword_rule, Attribute, SpecMap};
use tracing::debug;

const EDITIONS: &[(&str, &[&str])] = &[("Pro", &["pro"]), ("Home", &["home"])];

const LICENSES: &[(&str, &[&str])] = &[
    ("DSP版", &["dsp"]),
    ("パッケージ版", &["パッケージ", "package"]),
    ("OEM版", &["oem"]),
];

/// Extracts edition and license form from an operating system product name.
pub fn extract_os_specs(product_name: &str) -> SpecMap {
    let mut specs = SpecMap::new();
    let name = product_name.to_lowercase();

    if let Some(edition) = first_keyword_rule(&name, EDITIONS) {
        debug!("Detected edition: {}", edition);
        specs.insert(Attribute::Edition, edition.to_string());
    }

    if let Some(license) = first_keyword_rule(&name, LICENSES) {
        debug!("Detected license: {}", license);
        specs.insert(Attribute::License, license.to_string());
    }

    specs
}
