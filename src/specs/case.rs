//! Case form factor.

use super::{first_keyword_rule, Attribute, SpecMap};
use tracing::debug;

/// Same precedence as motherboards: plain ATX only after E-ATX and Micro-ATX.
const FORM_FACTORS: &[(&str, &[&str])] = &[
    ("E-ATX", &["e-atx", "eatx"]),
    ("Micro-ATX", &["micro-atx", "matx"]),
    ("ATX", &["atx"]),
    ("Mini-ITX", &["mini-itx", "mitx"]),
];

/// Extracts the supported form factor from a PC case name.
pub fn extract_case_specs(product_name: &str) -> SpecMap {
    let mut specs = SpecMap::new();
    let name = product_name.to_lowercase();

    if let Some(form_factor) = first_keyword_rule(&name, FORM_FACTORS) {
        debug!("Detected form factor: {}", form_factor);
        specs.insert(Attribute::FormFactor, form_factor.to_string());
    }

    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ff(name: &str) -> Option<String> {
        extract_case_specs(name).get(&Attribute::FormFactor).cloned()
    }

    #[test]
    fn test_case_form_factors() {
        assert_eq!(ff("Fractal Design Meshify 2 XL EATX").as_deref(), Some("E-ATX"));
        assert_eq!(ff("Thermaltake S100 Micro-ATX ミニタワー").as_deref(), Some("Micro-ATX"));
        assert_eq!(ff("Corsair 4000D Airflow ATX").as_deref(), Some("ATX"));
        assert_eq!(ff("Cooler Master NR200P Mini-ITX").as_deref(), Some("Mini-ITX"));
    }

    #[test]
    fn test_case_without_form_factor() {
        assert_eq!(ff("NZXT H9 Flow"), None);
        // Motherboard-only aliases are not recognised for cases
        assert_eq!(ff("Mini ITX cube"), None);
    }
}
