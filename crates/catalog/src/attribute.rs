//! Product attributes: a named, ordered list of selectable items.

use serde::{Deserialize, Serialize};

use storefront_core::{AttributeId, Entity};

/// One selectable item within an attribute, e.g. `{"S", "Small"}`.
///
/// Item order within an attribute is insertion order and significant for
/// display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeItem {
    pub value: String,
    pub display_value: String,
}

impl AttributeItem {
    pub fn new(value: impl Into<String>, display_value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            display_value: display_value.into(),
        }
    }
}

/// Named attribute owned by exactly one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    id: AttributeId,
    name: String,
    items: Vec<AttributeItem>,
}

impl Attribute {
    pub fn new(id: AttributeId, name: impl Into<String>, items: Vec<AttributeItem>) -> Self {
        Self {
            id,
            name: name.into(),
            items,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[AttributeItem] {
        &self.items
    }
}

impl Entity for Attribute {
    type Id = AttributeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_preserve_insertion_order() {
        let attr = Attribute::new(
            AttributeId::new(),
            "Size",
            vec![
                AttributeItem::new("S", "Small"),
                AttributeItem::new("M", "Medium"),
                AttributeItem::new("L", "Large"),
            ],
        );
        let values: Vec<&str> = attr.items().iter().map(|i| i.value.as_str()).collect();
        assert_eq!(values, ["S", "M", "L"]);
    }
}
