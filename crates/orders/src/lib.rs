//! Orders domain module.
//!
//! This crate contains business rules for order aggregation: multi-line orders
//! with per-line price snapshots and a continuously derived total.

pub mod order;

pub use order::{Order, OrderLine, SelectedAttributes};
