//! Search query preparation.

use crate::category::Category;

/// Prepares a product name for submission to a marketplace search.
///
/// Adding category words to the query makes kakaku.com answer with a 404,
/// so the category is accepted but not used; only surrounding whitespace
/// is removed.
pub fn optimize(product_name: &str, _category: Option<Category>) -> String {
    product_name.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimize_passes_name_through() {
        assert_eq!(optimize("RTX 4070 SUPER", Some(Category::Gpu)), "RTX 4070 SUPER");
        assert_eq!(optimize("Ryzen 7 7800X3D", None), "Ryzen 7 7800X3D");
    }

    #[test]
    fn test_optimize_trims() {
        assert_eq!(optimize("  DDR5-6000 32GB \n", Some(Category::Memory)), "DDR5-6000 32GB");
    }
}
