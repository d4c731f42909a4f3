//! Category registry: category name -> allowed attribute names.
//!
//! The registry is owned by the application context and injected into the code
//! that needs it (product construction, attribute validation). It is not
//! global state. Mutation is guarded by an interior `RwLock` so a shared
//! registry can be handed to concurrent requests.

use std::collections::HashMap;
use std::sync::RwLock;

/// Process-wide mapping from category name to the attribute names permitted
/// for products in that category.
///
/// An empty allowed set means "unrestricted": any attribute name validates.
/// Callers must register categories before constructing products of that
/// category, or validation allows everything.
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    allowed: RwLock<HashMap<String, Vec<String>>>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-loaded with the stock categories and their attribute sets.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register(
            "tech",
            ["Capacity", "Color", "With USB 3 ports", "Touch ID in keyboard"]
                .map(String::from)
                .to_vec(),
        );
        registry.register("clothes", ["Size", "Color"].map(String::from).to_vec());
        registry
    }

    /// Register a category with its allowed attribute names.
    ///
    /// Idempotent; re-registering overwrites the allowed set. An empty list
    /// registers the category as unrestricted.
    pub fn register(&self, name: impl Into<String>, allowed_attributes: Vec<String>) {
        self.write().insert(name.into(), allowed_attributes);
    }

    /// Append one attribute name to a category's allowed set. No-op when the
    /// name is already present; registers the category when unknown.
    pub fn add_allowed(&self, category: &str, attribute_name: impl Into<String>) {
        let attribute_name = attribute_name.into();
        let mut allowed = self.write();
        let names = allowed.entry(category.to_string()).or_default();
        if !names.contains(&attribute_name) {
            names.push(attribute_name);
        }
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// True when the category is unrestricted (unknown or empty allowed set)
    /// or the name is in its allowed set.
    pub fn validate(&self, category: &str, attribute_name: &str) -> bool {
        match self.read().get(category) {
            Some(names) if !names.is_empty() => names.iter().any(|n| n == attribute_name),
            _ => true,
        }
    }

    // A poisoned lock still holds consistent data (writers only insert/push),
    // so recover the inner value rather than propagate a panic.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Vec<String>>> {
        self.allowed.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Vec<String>>> {
        self.allowed.write().unwrap_or_else(|e| e.into_inner())
    }
}
