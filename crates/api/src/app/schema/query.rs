//! Query resolvers.

use serde_json::Value;

use storefront_core::{DomainResult, ProductId};

use crate::app::dto;
use crate::app::services::AppServices;

use super::decode;

pub fn categories(services: &AppServices) -> DomainResult<Value> {
    let categories = services.store.find_all_categories()?;
    Ok(Value::Array(
        categories.iter().map(dto::category_view).collect(),
    ))
}

pub fn products(services: &AppServices) -> DomainResult<Value> {
    let products = services.store.find_all_products()?;
    Ok(Value::Array(products.iter().map(dto::product_view).collect()))
}

/// Single-product lookup. A missing product resolves to `null` (queries do
/// not error on absence; mutations do).
pub fn product(services: &AppServices, variables: &Value) -> DomainResult<Value> {
    let request: dto::ProductByIdRequest = decode(variables)?;
    let id: ProductId = request.id.parse()?;

    Ok(services
        .store
        .find_product(id)?
        .map(|p| dto::product_view(&p))
        .unwrap_or(Value::Null))
}

pub fn orders(services: &AppServices) -> DomainResult<Value> {
    let orders = services.store.find_all_orders()?;
    Ok(Value::Array(orders.iter().map(dto::order_view).collect()))
}
