//! Product construction use case.

use storefront_core::ProductId;

use crate::category::Category;
use crate::product::Product;
use crate::registry::CategoryRegistry;

/// Builds products bound to a named category.
///
/// Persistence and attribute/price population stay with the caller; this only
/// guarantees the category/registry relationship is consistent before the
/// product exists.
pub struct ProductFactory;

impl ProductFactory {
    /// Construct an unpersisted product bound to `category`.
    ///
    /// Unknown categories are auto-registered as unrestricted. That is a
    /// deliberate policy choice: a category nobody configured constrains
    /// nothing, rather than rejecting the product outright.
    pub fn create(
        registry: &CategoryRegistry,
        category: Category,
        name: impl Into<String>,
    ) -> Product {
        if !registry.is_registered(category.name()) {
            registry.register(category.name(), Vec::new());
        }
        Product::new(ProductId::new(), name, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeItem;
    use storefront_core::CategoryId;

    #[test]
    fn create_binds_product_to_category() {
        let registry = CategoryRegistry::with_defaults();
        let category = Category::new(CategoryId::new(), "tech");
        let product = ProductFactory::create(&registry, category, "Keyboard");

        assert_eq!(product.category().name(), "tech");
        assert_eq!(product.name(), "Keyboard");
        assert!(product.in_stock());
        assert!(product.attributes().is_empty());
        assert!(product.price().is_none());
    }

    #[test]
    fn unknown_category_is_auto_registered_unrestricted() {
        let registry = CategoryRegistry::with_defaults();
        let category = Category::new(CategoryId::new(), "furniture");
        let mut product = ProductFactory::create(&registry, category, "Oak Desk");

        assert!(registry.is_registered("furniture"));
        // Unrestricted: any attribute name goes.
        assert!(product.add_attribute(&registry, "Finish", vec![AttributeItem::new("oak", "Oak")]));
    }
}
