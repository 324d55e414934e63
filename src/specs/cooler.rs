//! Cooler type: liquid or air.

use super::{first_keyword_rule, Attribute, SpecMap};
use tracing::debug;

const COOLER_TYPES: &[(&str, &[&str])] =
    &[("簡易水冷", &["簡易水冷", "aio", "水冷"]), ("空冷", &["空冷", "air"])];

/// Classifies a CPU cooler as liquid (簡易水冷) or air (空冷).
pub fn extract_cooler_specs(product_name: &str) -> SpecMap {
    let mut specs = SpecMap::new();
    let name = product_name.to_lowercase();

    if let Some(cooler_type) = first_keyword_rule(&name, COOLER_TYPES) {
        debug!("Detected cooler type: {}", cooler_type);
        specs.insert(Attribute::Type, cooler_type.to_string());
    }

    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(name: &str) -> Option<String> {
        extract_cooler_specs(name).get(&Attribute::Type).cloned()
    }

    #[test]
    fn test_liquid_coolers() {
        assert_eq!(kind("DeepCool LS720 簡易水冷").as_deref(), Some("簡易水冷"));
        assert_eq!(kind("NZXT Kraken 360 AIO").as_deref(), Some("簡易水冷"));
        assert_eq!(kind("本格水冷キット").as_deref(), Some("簡易水冷"));
    }

    #[test]
    fn test_air_coolers() {
        assert_eq!(kind("Noctua NH-D15 空冷").as_deref(), Some("空冷"));
        assert_eq!(kind("be quiet! Dark Rock Pro 5 Air").as_deref(), Some("空冷"));
    }

    #[test]
    fn test_liquid_keywords_win() {
        assert_eq!(kind("AIO with air-guide shroud").as_deref(), Some("簡易水冷"));
    }

    #[test]
    fn test_unknown_cooler() {
        assert_eq!(kind("Noctua NH-D15"), None);
    }
}
