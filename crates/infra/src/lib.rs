//! Persistence gateway + transactional use cases.
//!
//! The store is in-memory: a `RwLock` over typed collections with snapshot
//! transactions. The rest of the system only sees find/persist/remove per
//! entity type plus `begin`/`commit`/rollback-on-drop, so a real database
//! could slot in behind the same surface.

pub mod order_factory;
pub mod store;

pub use order_factory::{OrderFactory, OrderItem};
pub use store::{InMemoryStore, Transaction};
