//! Request DTOs and JSON view mapping.
//!
//! Wire fields are camelCase (GraphQL convention); amounts cross the boundary
//! as JSON numbers and are held as `Decimal` inside the domain.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use serde_json::{Value, json};

use storefront_catalog::{Attribute, Category, Price, Product};
use storefront_core::{DomainError, DomainResult, Entity};
use storefront_orders::{Order, OrderLine};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub product_id: String,
    pub quantity: i64,
    #[serde(default)]
    pub selected_attributes: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItemInput>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub category: String,
    pub brand: Option<String>,
    pub description: Option<String>,
    pub in_stock: Option<bool>,
    pub gallery: Option<Vec<String>>,
    pub attributes: Option<Vec<AttributeInput>>,
    pub price: Option<PriceInput>,
}

#[derive(Debug, Deserialize)]
pub struct AttributeInput {
    pub name: String,
    #[serde(default)]
    pub items: Vec<AttributeItemInput>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeItemInput {
    pub value: String,
    pub display_value: String,
}

#[derive(Debug, Deserialize)]
pub struct PriceInput {
    pub amount: f64,
    pub currency: CurrencyInput,
}

#[derive(Debug, Deserialize)]
pub struct CurrencyInput {
    pub label: String,
    pub symbol: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub id: String,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub description: Option<String>,
    pub in_stock: Option<bool>,
    pub gallery: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct ProductByIdRequest {
    pub id: String,
}

/// Convert a wire amount to a `Decimal`, rejecting negatives and
/// non-finite values. Amounts are money, so they round to the cent.
pub fn price_amount(value: f64) -> DomainResult<Decimal> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::invalid_input(
            "price amount must be a non-negative number",
        ));
    }
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp(2))
        .ok_or_else(|| DomainError::invalid_input("price amount out of range"))
}

// -------------------------
// Response views
// -------------------------

fn decimal_view(amount: Decimal) -> Value {
    json!(amount.to_f64().unwrap_or_default())
}

pub fn category_view(category: &Category) -> Value {
    json!({
        "id": category.id().to_string(),
        "name": category.name(),
    })
}

fn price_view(price: &Price) -> Value {
    json!({
        "id": price.id().to_string(),
        "amount": decimal_view(price.amount()),
        "currency": {
            "label": price.currency().label(),
            "symbol": price.currency().symbol(),
        },
    })
}

fn attribute_view(attribute: &Attribute) -> Value {
    json!({
        "id": attribute.id().to_string(),
        "name": attribute.name(),
        "items": attribute
            .items()
            .iter()
            .map(|i| json!({"value": i.value, "displayValue": i.display_value}))
            .collect::<Vec<_>>(),
    })
}

pub fn product_view(product: &Product) -> Value {
    json!({
        "id": product.id().to_string(),
        "name": product.name(),
        "brand": product.brand(),
        "description": product.description(),
        "inStock": product.in_stock(),
        "gallery": product.gallery(),
        "category": category_view(product.category()),
        "attributes": product.attributes().iter().map(attribute_view).collect::<Vec<_>>(),
        "price": product.price().map(price_view),
    })
}

fn order_line_view(line: &OrderLine) -> Value {
    json!({
        "productId": line.product_id().to_string(),
        "quantity": line.quantity(),
        "unitPrice": decimal_view(line.unit_price()),
        "selectedAttributes": line.selected_attributes(),
        "lineTotal": decimal_view(line.line_total()),
    })
}

pub fn order_view(order: &Order) -> Value {
    json!({
        "id": order.id().to_string(),
        "orderedLines": order.lines().iter().map(order_line_view).collect::<Vec<_>>(),
        "total": decimal_view(order.total()),
        "createdAt": order.created_at().to_rfc3339(),
    })
}
