//! Catalog domain module.
//!
//! This crate contains business rules for products and categories, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod attribute;
pub mod category;
pub mod factory;
pub mod money;
pub mod product;
pub mod registry;

pub use attribute::{Attribute, AttributeItem};
pub use category::Category;
pub use factory::ProductFactory;
pub use money::{Currency, Price};
pub use product::Product;
pub use registry::CategoryRegistry;
