//! Mutation resolvers.
//!
//! Each mutation runs inside a single store transaction: validation failures
//! drop the transaction and nothing is persisted.

use serde_json::Value;

use storefront_catalog::{AttributeItem, ProductFactory};
use storefront_core::{DomainError, DomainResult, Entity, ProductId};
use storefront_infra::{OrderFactory, OrderItem};

use crate::app::dto;
use crate::app::services::AppServices;

use super::decode;

pub fn create_order(services: &AppServices, variables: &Value) -> DomainResult<Value> {
    let request: dto::CreateOrderRequest = decode(variables)?;

    let items = request
        .items
        .into_iter()
        .map(|item| {
            Ok(OrderItem {
                product_id: item.product_id.parse()?,
                quantity: item.quantity,
                selected_attributes: item.selected_attributes,
            })
        })
        .collect::<DomainResult<Vec<_>>>()?;

    let order = OrderFactory::create_order(&services.store, &items)?;
    Ok(dto::order_view(&order))
}

pub fn create_product(services: &AppServices, variables: &Value) -> DomainResult<Value> {
    let request: dto::CreateProductRequest = decode(variables)?;

    let mut tx = services.store.begin()?;
    let category = tx.find_category_by_name(&request.category).ok_or_else(|| {
        DomainError::not_found(format!("category not found: {}", request.category))
    })?;

    let mut product = ProductFactory::create(&services.registry, category, request.name);
    if let Some(brand) = request.brand {
        product.set_brand(brand);
    }
    if let Some(description) = request.description {
        product.set_description(description);
    }
    if let Some(in_stock) = request.in_stock {
        product.set_in_stock(in_stock);
    }
    if let Some(gallery) = request.gallery {
        product.set_gallery(gallery);
    }

    for attribute in request.attributes.unwrap_or_default() {
        let items = attribute
            .items
            .into_iter()
            .map(|i| AttributeItem::new(i.value, i.display_value))
            .collect();
        if !product.add_attribute(&services.registry, &attribute.name, items) {
            return Err(DomainError::invalid_input(format!(
                "invalid attribute: {} for category {}",
                attribute.name, request.category
            )));
        }
    }

    if let Some(price) = request.price {
        let amount = dto::price_amount(price.amount)?;
        product.set_price(amount, &price.currency.label, &price.currency.symbol)?;
    }

    tx.persist_product(product.clone());
    tx.commit();

    tracing::info!(product_id = %product.id(), name = product.name(), "product created");
    Ok(dto::product_view(&product))
}

pub fn update_product(services: &AppServices, variables: &Value) -> DomainResult<Value> {
    let request: dto::UpdateProductRequest = decode(variables)?;
    let id: ProductId = request.id.parse()?;

    let mut tx = services.store.begin()?;
    let mut product = tx
        .find_product(id)
        .ok_or_else(|| DomainError::not_found(format!("product not found: {id}")))?;

    if let Some(name) = request.name {
        product.set_name(name);
    }
    if let Some(brand) = request.brand {
        product.set_brand(brand);
    }
    if let Some(description) = request.description {
        product.set_description(description);
    }
    if let Some(in_stock) = request.in_stock {
        product.set_in_stock(in_stock);
    }
    if let Some(gallery) = request.gallery {
        product.set_gallery(gallery);
    }

    tx.persist_product(product.clone());
    tx.commit();

    Ok(dto::product_view(&product))
}

pub fn delete_product(services: &AppServices, variables: &Value) -> DomainResult<Value> {
    let request: dto::ProductByIdRequest = decode(variables)?;
    let id: ProductId = request.id.parse()?;

    let mut tx = services.store.begin()?;
    if !tx.remove_product(id) {
        return Err(DomainError::not_found(format!("product not found: {id}")));
    }
    tx.commit();

    tracing::info!(product_id = %id, "product deleted");
    Ok(Value::Bool(true))
}
