//! Memory kit type, speed and capacity.

use super::{compile, first_capture, Attribute, SpecMap};
use regex_lite::Regex;
use std::sync::LazyLock;
use tracing::debug;

static SPEED: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile(&[r"(\d{4,5})\s*mhz", r"ddr[45]-(\d{4,5})"]));

/// A size with an optional module count on either side, as in "16GBx2",
/// "16GB × 2" or "2x16GB".
static CAPACITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\b(\d{1,2})\s*[x×*]\s*)?(\d+)\s*gb(?:\s*[x×*]\s*(\d+))?").unwrap()
});

/// Extracts memory type, speed and total capacity from a memory kit name.
///
/// Unlike every other numeric attribute, capacity adds up all sizes in the
/// name so that kits listed per module report their total. A module
/// breakdown that repeats a stated total, as in "32GB (16GBx2)", is not
/// counted again.
pub fn extract_memory_specs(product_name: &str) -> SpecMap {
    let mut specs = SpecMap::new();
    let name = product_name.to_lowercase();

    let memory_type = if name.contains("ddr5") {
        Some("DDR5")
    } else if name.contains("ddr4") {
        Some("DDR4")
    } else {
        None
    };
    if let Some(memory_type) = memory_type {
        debug!("Detected memory type: {}", memory_type);
        specs.insert(Attribute::Type, memory_type.to_string());
    }

    if let Some(speed) = first_capture(&name, &SPEED) {
        debug!("Detected memory speed: {}MHz", speed);
        specs.insert(Attribute::Speed, format!("{}MHz", speed));
    }

    if let Some(total) = total_capacity_gb(&name) {
        debug!("Detected memory capacity: {}GB", total);
        specs.insert(Attribute::Capacity, format!("{}GB", total));
    }

    specs
}

fn total_capacity_gb(name: &str) -> Option<u64> {
    let mut totals: Vec<u64> = Vec::new();
    let mut kits: Vec<u64> = Vec::new();

    for caps in CAPACITY.captures_iter(name) {
        let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u64>().ok());
        let Some(size) = number(2) else {
            continue;
        };

        match number(1).or_else(|| number(3)) {
            Some(modules) => kits.push(size.saturating_mul(modules)),
            None => totals.push(size),
        }
    }

    if totals.is_empty() && kits.is_empty() {
        return None;
    }

    let mut stated = totals.clone();
    let mut total: u64 = totals.iter().fold(0u64, |sum, size| sum.saturating_add(*size));
    for kit in kits {
        match stated.iter().position(|size| *size == kit) {
            Some(i) => {
                debug!("Module breakdown repeats the {}GB total", kit);
                stated.swap_remove(i);
            }
            None => total = total.saturating_add(kit),
        }
    }

    Some(total)
}
