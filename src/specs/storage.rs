//! Storage type and capacity.

use super::{compile, Attribute, SpecMap};
use regex_lite::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Terabyte forms are tried before gigabyte forms.
static CAPACITY: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(&[r"(\d+)\s*tb", r"(\d+)\s*gb"]));

/// Extracts drive type and capacity from a storage product name.
pub fn extract_storage_specs(product_name: &str) -> SpecMap {
    let mut specs = SpecMap::new();
    let name = product_name.to_lowercase();

    let drive_type = if name.contains("nvme") || name.contains("m.2") {
        Some("NVMe SSD")
    } else if name.contains("ssd") && name.contains("sata") {
        Some("SATA SSD")
    } else if name.contains("ssd") {
        Some("SSD")
    } else if name.contains("hdd") {
        Some("HDD")
    } else {
        None
    };
    if let Some(drive_type) = drive_type {
        debug!("Detected storage type: {}", drive_type);
        specs.insert(Attribute::Type, drive_type.to_string());
    }

    if let Some(capacity) = capacity(&name) {
        debug!("Detected storage capacity: {}", capacity);
        specs.insert(Attribute::Capacity, capacity);
    }

    specs
}

fn capacity(name: &str) -> Option<String> {
    CAPACITY.iter().find_map(|re| {
        let caps = re.captures(name)?;
        let amount = caps.get(1)?.as_str();
        let unit = if caps.get(0)?.as_str().contains("tb") { "TB" } else { "GB" };
        Some(format!("{}{}", amount, unit))
    })
}
