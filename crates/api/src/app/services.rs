//! Application context: store + registry, seeded with the stock categories.

use storefront_catalog::{Category, CategoryRegistry};
use storefront_core::CategoryId;
use storefront_infra::InMemoryStore;

/// Shared services handed to every request.
pub struct AppServices {
    pub store: InMemoryStore,
    pub registry: CategoryRegistry,
}

/// Build the application context.
///
/// The registry starts with the stock category restrictions, and matching
/// `Category` entities are persisted so `categories`/`createProduct` can
/// resolve them by name.
pub fn build_services() -> AppServices {
    let registry = CategoryRegistry::with_defaults();
    let store = InMemoryStore::new();

    let mut tx = store.begin().expect("fresh store cannot be poisoned");
    tx.persist_category(Category::new(CategoryId::new(), "tech"));
    tx.persist_category(Category::new(CategoryId::new(), "clothes"));
    tx.commit();

    AppServices { store, registry }
}
