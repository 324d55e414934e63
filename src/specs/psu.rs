//! Power supply wattage and 80 PLUS rating.

use super::{compile, first_capture, first_keyword_rule, Attribute, SpecMap};
use regex_lite::Regex;
use std::sync::LazyLock;
use tracing::debug;

static WATTAGE: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile(&[r"(\d{3,4})\s*w(?:att)?(?:\s|$)", r"(\d{3,4})\s*ワット"]));

const CERTIFICATIONS: &[(&str, &[&str])] = &[
    ("80 PLUS Titanium", &["titanium", "チタン"]),
    ("80 PLUS Platinum", &["platinum", "プラチナ"]),
    ("80 PLUS Gold", &["gold", "ゴールド"]),
    ("80 PLUS Silver", &["silver", "シルバー"]),
    ("80 PLUS Bronze", &["bronze", "ブロンズ"]),
    ("80 PLUS Standard", &["80 plus standard", "80plus standard"]),
];

/// Extracts wattage and 80 PLUS certification from a power supply name.
pub fn extract_psu_specs(product_name: &str) -> SpecMap {
    let mut specs = SpecMap::new();
    let name = product_name.to_lowercase();

    if let Some(watts) = first_capture(&name, &WATTAGE) {
        debug!("Detected wattage: {}W", watts);
        specs.insert(Attribute::Wattage, format!("{}W", watts));
    }

    let certification = first_keyword_rule(&name, CERTIFICATIONS)
        .or_else(|| name.contains("80 plus").then_some("80 PLUS"));
    if let Some(certification) = certification {
        debug!("Detected certification: {}", certification);
        specs.insert(Attribute::Certification, certification.to_string());
    }

    specs
}
