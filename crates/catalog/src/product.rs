//! Product aggregate: a sellable item bound to exactly one category.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::{AttributeId, DomainResult, Entity, PriceId, ProductId};

use crate::attribute::{Attribute, AttributeItem};
use crate::category::Category;
use crate::money::{Currency, Price};
use crate::registry::CategoryRegistry;

/// Aggregate root: Product.
///
/// Owns its attributes and optional price; both are removed with it. The
/// category reference is required and never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    brand: String,
    description: String,
    in_stock: bool,
    gallery: Vec<String>,
    category: Category,
    attributes: Vec<Attribute>,
    price: Option<Price>,
}

impl Product {
    /// Construct a bare product bound to a category. Prefer
    /// [`ProductFactory::create`], which also keeps the registry consistent.
    ///
    /// [`ProductFactory::create`]: crate::factory::ProductFactory::create
    pub fn new(id: ProductId, name: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            brand: String::new(),
            description: String::new(),
            in_stock: true,
            gallery: Vec::new(),
            category,
            attributes: Vec::new(),
            price: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    pub fn gallery(&self) -> &[String] {
        &self.gallery
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn price(&self) -> Option<&Price> {
        self.price.as_ref()
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name() == name)
    }

    /// Whether this product can currently be placed on an order.
    pub fn is_orderable(&self) -> bool {
        self.price.as_ref().is_some_and(Price::is_orderable)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.brand = brand.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_in_stock(&mut self, in_stock: bool) {
        self.in_stock = in_stock;
    }

    pub fn set_gallery(&mut self, gallery: Vec<String>) {
        self.gallery = gallery;
    }

    /// Add a named attribute after validating the name against the registry
    /// entry for this product's category.
    ///
    /// Returns `false` — making **no** mutation — when the registry rejects
    /// the name or the product already carries an attribute with it. The
    /// caller decides whether a rejection is fatal. Validation happens only at
    /// insertion: later registry changes never invalidate stored attributes.
    pub fn add_attribute(
        &mut self,
        registry: &CategoryRegistry,
        name: impl Into<String>,
        items: Vec<AttributeItem>,
    ) -> bool {
        let name = name.into();
        if !registry.validate(self.category.name(), &name) {
            return false;
        }
        if self.has_attribute(&name) {
            return false;
        }
        self.attributes
            .push(Attribute::new(AttributeId::new(), name, items));
        true
    }

    /// Replace any existing price with a new one.
    ///
    /// Only currency shape is validated here; amount positivity is policed by
    /// the callers that care (order placement, the create-product mutation).
    pub fn set_price(
        &mut self,
        amount: Decimal,
        currency_label: &str,
        currency_symbol: &str,
    ) -> DomainResult<()> {
        let currency = Currency::new(currency_label, currency_symbol)?;
        self.price = Some(Price::new(PriceId::new(), amount, currency));
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
