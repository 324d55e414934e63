//! Motherboard socket, chipset and form factor.

use super::{first_keyword_rule, Attribute, SpecMap};
use tracing::debug;

const SOCKETS: &[(&str, &[&str])] = &[
    ("LGA1700", &["lga1700", "lga 1700"]),
    ("LGA1200", &["lga1200", "lga 1200"]),
    ("AM5", &["am5", "socket am5"]),
    ("AM4", &["am4", "socket am4"]),
];

/// Checked in order; X670E must precede X670 and B650E must precede B650.
const CHIPSETS: &[&str] = &[
    "Z790", "Z690", "B760", "B660", "H770", "H670", "X670E", "X670", "B650E", "B650", "A620",
    "X570", "B550", "A520",
];

/// "atx" is a substring of the E-ATX and Micro-ATX aliases, so plain ATX is
/// tested after both.
const FORM_FACTORS: &[(&str, &[&str])] = &[
    ("E-ATX", &["e-atx", "eatx", "extended atx"]),
    ("Micro-ATX", &["micro-atx", "matx", "micro atx"]),
    ("ATX", &["atx"]),
    ("Mini-ITX", &["mini-itx", "mini itx", "mitx"]),
];

/// Extracts socket, chipset and form factor from a motherboard name.
pub fn extract_motherboard_specs(product_name: &str) -> SpecMap {
    let mut specs = SpecMap::new();
    let name = product_name.to_lowercase();

    if let Some(socket) = first_keyword_rule(&name, SOCKETS) {
        debug!("Detected socket: {}", socket);
        specs.insert(Attribute::Socket, socket.to_string());
    }

    if let Some(chipset) = CHIPSETS.iter().find(|c| name.contains(&c.to_lowercase())) {
        debug!("Detected chipset: {}", chipset);
        specs.insert(Attribute::Chipset, chipset.to_string());
    }

    if let Some(form_factor) = first_keyword_rule(&name, FORM_FACTORS) {
        debug!("Detected form factor: {}", form_factor);
        specs.insert(Attribute::FormFactor, form_factor.to_string());
    }

    specs
}
