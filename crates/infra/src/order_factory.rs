//! Transactional order creation use case.

use storefront_core::{DomainError, DomainResult, Entity, OrderId, ProductId};
use storefront_orders::{Order, SelectedAttributes};

use crate::store::InMemoryStore;

/// Raw request data for one order line.
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: i64,
    pub selected_attributes: SelectedAttributes,
}

/// Orchestrates validated, transactional order creation.
///
/// Validation that needs external lookups (does the product exist, does it
/// carry the selected attributes) happens here; the `Order` aggregate itself
/// only enforces structural invariants.
pub struct OrderFactory;

impl OrderFactory {
    /// Create and persist an order from raw items inside one transaction.
    ///
    /// Any failure rolls the whole transaction back; partial orders are never
    /// persisted.
    pub fn create_order(store: &InMemoryStore, items: &[OrderItem]) -> DomainResult<Order> {
        if items.is_empty() {
            return Err(DomainError::invalid_input(
                "order must contain at least one item",
            ));
        }

        let mut tx = store.begin()?;
        let mut order = Order::new(OrderId::new());

        for item in items {
            let product = tx.find_product(item.product_id).ok_or_else(|| {
                DomainError::not_found(format!("product not found: {}", item.product_id))
            })?;

            let quantity = u32::try_from(item.quantity)
                .ok()
                .filter(|q| *q > 0)
                .ok_or_else(|| DomainError::invalid_input("quantity must be positive"))?;

            for name in item.selected_attributes.keys() {
                if !product.has_attribute(name) {
                    return Err(DomainError::invalid_input(format!(
                        "invalid attribute: {name}"
                    )));
                }
            }

            order.add_line(&product, quantity, item.selected_attributes.clone())?;
        }

        tx.persist_order(order.clone());
        tx.commit();

        tracing::info!(order_id = %order.id(), total = %order.total(), "order created");
        Ok(order)
    }
}
