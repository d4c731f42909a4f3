//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two instances
/// with the same fields are the same value. `Currency { label: "USD",
/// symbol: "$" }` is a value object; a `Product` (which keeps its identity
/// while its fields change) is not.
///
/// To "modify" a value object, construct a new one. The trait bounds keep
/// value objects cheap to copy, comparable, and debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
