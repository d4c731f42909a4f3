//! In-memory persistence gateway.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use storefront_catalog::{Category, Product};
use storefront_core::{CategoryId, DomainError, DomainResult, Entity, OrderId, ProductId};
use storefront_orders::Order;

/// Collections keyed by id. Ids are UUIDv7 (time-ordered), so iterating a
/// `BTreeMap` yields entities in creation order.
#[derive(Debug, Clone, Default)]
struct StoreState {
    products: BTreeMap<ProductId, Product>,
    orders: BTreeMap<OrderId, Order>,
    categories: BTreeMap<CategoryId, Category>,
}

/// In-memory store with snapshot transactions.
///
/// Reads take the read lock and clone out what they return. Writes go through
/// [`InMemoryStore::begin`]: the returned [`Transaction`] holds the write lock
/// for its lifetime, so transactions serialize and readers never observe a
/// half-applied one.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a transaction. Mutations apply to live state under the write
    /// lock; dropping the transaction without [`Transaction::commit`] restores
    /// the snapshot taken here.
    pub fn begin(&self) -> DomainResult<Transaction<'_>> {
        let guard = self
            .state
            .write()
            .map_err(|_| DomainError::transaction("store lock poisoned"))?;
        let snapshot = guard.clone();
        Ok(Transaction {
            guard,
            snapshot,
            committed: false,
        })
    }

    pub fn find_product(&self, id: ProductId) -> DomainResult<Option<Product>> {
        Ok(self.read()?.products.get(&id).cloned())
    }

    pub fn find_all_products(&self) -> DomainResult<Vec<Product>> {
        Ok(self.read()?.products.values().cloned().collect())
    }

    pub fn find_products_by(
        &self,
        predicate: impl Fn(&Product) -> bool,
    ) -> DomainResult<Vec<Product>> {
        Ok(self
            .read()?
            .products
            .values()
            .filter(|p| predicate(p))
            .cloned()
            .collect())
    }

    pub fn find_order(&self, id: OrderId) -> DomainResult<Option<Order>> {
        Ok(self.read()?.orders.get(&id).cloned())
    }

    pub fn find_all_orders(&self) -> DomainResult<Vec<Order>> {
        Ok(self.read()?.orders.values().cloned().collect())
    }

    pub fn find_all_categories(&self) -> DomainResult<Vec<Category>> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    pub fn find_category_by_name(&self, name: &str) -> DomainResult<Option<Category>> {
        Ok(self
            .read()?
            .categories
            .values()
            .find(|c| c.name() == name)
            .cloned())
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, StoreState>> {
        self.state
            .read()
            .map_err(|_| DomainError::transaction("store lock poisoned"))
    }
}

/// A unit of work against the store.
///
/// All mutations between [`InMemoryStore::begin`] and [`Transaction::commit`]
/// become visible atomically; dropping without commit rolls everything back.
#[derive(Debug)]
pub struct Transaction<'a> {
    guard: RwLockWriteGuard<'a, StoreState>,
    snapshot: StoreState,
    committed: bool,
}

impl Transaction<'_> {
    pub fn find_product(&self, id: ProductId) -> Option<Product> {
        self.guard.products.get(&id).cloned()
    }

    pub fn find_category_by_name(&self, name: &str) -> Option<Category> {
        self.guard.categories.values().find(|c| c.name() == name).cloned()
    }

    pub fn persist_product(&mut self, product: Product) {
        self.guard.products.insert(*product.id(), product);
    }

    /// Remove a product and, because the product owns them, its price and
    /// attributes with it. Returns whether anything was removed.
    pub fn remove_product(&mut self, id: ProductId) -> bool {
        self.guard.products.remove(&id).is_some()
    }

    pub fn persist_order(&mut self, order: Order) {
        self.guard.orders.insert(*order.id(), order);
    }

    pub fn remove_order(&mut self, id: OrderId) -> bool {
        self.guard.orders.remove(&id).is_some()
    }

    pub fn persist_category(&mut self, category: Category) {
        self.guard.categories.insert(*category.id(), category);
    }

    /// Publish every mutation made through this transaction.
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.committed {
            // Rollback: restore the state captured at begin().
            std::mem::swap(&mut *self.guard, &mut self.snapshot);
        }
    }
}
