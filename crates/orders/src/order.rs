//! Order aggregate: one or more product purchases in a single priced
//! transaction.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_core::{DomainError, DomainResult, Entity, OrderId, ProductId};

/// Attribute selections captured on a line: attribute name -> chosen value.
pub type SelectedAttributes = BTreeMap<String, String>;

/// One product entry within an order.
///
/// `unit_price` is a snapshot taken when the line was added; later changes to
/// the product's live price never reach existing orders. `line_total` is
/// always `unit_price * quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    product_id: ProductId,
    quantity: u32,
    unit_price: Decimal,
    selected_attributes: SelectedAttributes,
    line_total: Decimal,
}

impl OrderLine {
    fn new(
        product_id: ProductId,
        quantity: u32,
        unit_price: Decimal,
        selected_attributes: SelectedAttributes,
    ) -> Self {
        Self {
            product_id,
            quantity,
            unit_price,
            selected_attributes,
            line_total: unit_price * Decimal::from(quantity),
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn selected_attributes(&self) -> &SelectedAttributes {
        &self.selected_attributes
    }

    pub fn line_total(&self) -> Decimal {
        self.line_total
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.line_total = self.unit_price * Decimal::from(quantity);
    }
}

/// Aggregate root: Order.
///
/// Lines are mutated only through the order's own operations, each of which
/// re-derives `total`. The invariant `total == sum(line_total)` holds after
/// every operation.
///
/// Duplicate product ids across lines are permitted; `remove_line` and
/// `update_quantity` act on the **first** matching line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    lines: Vec<OrderLine>,
    total: Decimal,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Create an empty order.
    pub fn new(id: OrderId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            total: Decimal::ZERO,
            created_at: Utc::now(),
        }
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Append a line for `product`, capturing its current unit price.
    ///
    /// Fails with `InvalidInput` when the quantity is zero or the product has
    /// no strictly positive price.
    pub fn add_line(
        &mut self,
        product: &Product,
        quantity: u32,
        selected_attributes: SelectedAttributes,
    ) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::invalid_input("quantity must be positive"));
        }

        let unit_price = product
            .price()
            .filter(|p| p.is_orderable())
            .map(|p| p.amount())
            .ok_or_else(|| {
                DomainError::invalid_input(format!(
                    "product {} has no valid price",
                    product.id()
                ))
            })?;

        self.lines.push(OrderLine::new(
            *product.id(),
            quantity,
            unit_price,
            selected_attributes,
        ));
        self.recompute_total();
        Ok(())
    }

    /// Remove the first line matching `product_id`.
    pub fn remove_line(&mut self, product_id: ProductId) -> DomainResult<()> {
        let index = self
            .position_of(product_id)
            .ok_or_else(|| Self::line_not_found(product_id))?;
        self.lines.remove(index);
        self.recompute_total();
        Ok(())
    }

    /// Change the quantity of the first line matching `product_id`.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::invalid_input("quantity must be positive"));
        }
        let index = self
            .position_of(product_id)
            .ok_or_else(|| Self::line_not_found(product_id))?;
        self.lines[index].set_quantity(quantity);
        self.recompute_total();
        Ok(())
    }

    /// Remove all lines; total becomes zero.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.recompute_total();
    }

    fn position_of(&self, product_id: ProductId) -> Option<usize> {
        self.lines.iter().position(|l| l.product_id == product_id)
    }

    fn line_not_found(product_id: ProductId) -> DomainError {
        DomainError::not_found(format!("product {product_id} not in order"))
    }

    fn recompute_total(&mut self) {
        self.total = self.lines.iter().map(OrderLine::line_total).sum();
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
