//! Graphics card board power.

use super::{compile, first_capture, Attribute, SpecMap};
use regex_lite::Regex;
use std::sync::LazyLock;
use tracing::debug;

static POWER: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[r"(\d{2,3})\s*w(?:att)?(?:\s|$)", r"tdp\s*(\d{2,3})", r"tgp\s*(\d{2,3})"])
});

/// Extracts board power (TDP/TGP) from a graphics card name.
pub fn extract_gpu_specs(product_name: &str) -> SpecMap {
    let mut specs = SpecMap::new();
    let name = product_name.to_lowercase();

    if let Some(watts) = first_capture(&name, &POWER) {
        debug!("Detected board power: {}W", watts);
        specs.insert(Attribute::Power, format!("{}W", watts));
    }

    specs
}
