//! Specification inference from free-text product names.
//!
//! Every extractor lower-cases the name and walks ordered rule tables. The
//! first rule that matches decides an attribute, except memory capacity, which
//! adds up every size found in the name. Attributes that are not detected are
//! simply absent from the returned map.

mod case;
mod cooler;
mod cpu;
mod gpu;
mod memory;
mod motherboard;
mod os;
mod psu;
mod storage;

pub use case::extract_case_specs;
pub use cooler::extract_cooler_specs;
pub use cpu::extract_cpu_specs;
pub use gpu::extract_gpu_specs;
pub use memory::extract_memory_specs;
pub use motherboard::extract_motherboard_specs;
pub use os::extract_os_specs;
pub use psu::extract_psu_specs;
pub use storage::extract_storage_specs;

use crate::category::Category;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A hardware attribute that can be inferred from a product name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    Socket,
    Tdp,
    Wattage,
    Certification,
    Chipset,
    FormFactor,
    Type,
    Speed,
    Capacity,
    Power,
    Edition,
    License,
}

impl Attribute {
    /// Returns the wire name of this attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Socket => "socket",
            Attribute::Tdp => "tdp",
            Attribute::Wattage => "wattage",
            Attribute::Certification => "certification",
            Attribute::Chipset => "chipset",
            Attribute::FormFactor => "formFactor",
            Attribute::Type => "type",
            Attribute::Speed => "speed",
            Attribute::Capacity => "capacity",
            Attribute::Power => "power",
            Attribute::Edition => "edition",
            Attribute::License => "license",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detected attributes of a product. Absent keys mean "not detected".
pub type SpecMap = BTreeMap<Attribute, String>;

/// Signature shared by all per-category extractors.
pub type Extractor = fn(&str) -> SpecMap;

impl Category {
    /// Returns the spec extractor for this category.
    pub fn extractor(&self) -> Extractor {
        match self {
            Category::Cpu => extract_cpu_specs,
            Category::Psu => extract_psu_specs,
            Category::Motherboard => extract_motherboard_specs,
            Category::Memory => extract_memory_specs,
            Category::Gpu => extract_gpu_specs,
            Category::Storage => extract_storage_specs,
            Category::Case => extract_case_specs,
            Category::Cooler => extract_cooler_specs,
            Category::Os => extract_os_specs,
        }
    }
}

/// Infers the specifications of `product_name` for the given category.
pub fn extract(category: Category, product_name: &str) -> SpecMap {
    category.extractor()(product_name)
}

/// Compiles constant patterns for a `LazyLock` table.
fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

/// Returns capture group 1 of the first pattern that matches `text`.
fn first_capture<'t>(text: &'t str, patterns: &[Regex]) -> Option<&'t str> {
    patterns
        .iter()
        .find_map(|re| re.captures(text).and_then(|caps| caps.get(1)).map(|m| m.as_str()))
}

/// Returns the value of the first rule with any keyword contained in `text`.
fn first_keyword_rule(text: &str, rules: &[(&'static str, &[&str])]) -> Option<&'static str> {
    rules
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(value, _)| *value)
}
