//! Category entity: a named grouping of products.

use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, Entity};

/// Named product grouping. Which attribute names are valid for members of a
/// category is tracked separately by the [`CategoryRegistry`]; the entity
/// itself is just identity + name.
///
/// [`CategoryRegistry`]: crate::registry::CategoryRegistry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
