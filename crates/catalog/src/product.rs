use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, Entity, ProductId};

/// Catalog entity: Product.
///
/// Read-only from the lookup surface's perspective. Beyond the identifier
/// and display name, attributes are an opaque name/value bag owned by the
/// upstream catalog; ordered map so serialized output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    attributes: BTreeMap<String, serde_json::Value>,
}

impl Product {
    /// Create a product with no additional attributes.
    pub fn new(id: ProductId, name: impl Into<String>) -> Result<Self, DomainError> {
        Self::with_attributes(id, name, BTreeMap::new())
    }

    /// Create a product carrying an opaque attribute bag.
    pub fn with_attributes(
        id: ProductId,
        name: impl Into<String>,
        attributes: BTreeMap<String, serde_json::Value>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            attributes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.attributes
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product_id() -> ProductId {
        ProductId::new("7").unwrap()
    }

    #[test]
    fn new_product_carries_id_and_name() {
        let product = Product::new(test_product_id(), "Pencil").unwrap();
        assert_eq!(product.id().as_str(), "7");
        assert_eq!(product.name(), "Pencil");
        assert!(product.attributes().is_empty());
    }

    #[test]
    fn new_product_rejects_empty_name() {
        let err = Product::new(test_product_id(), "   ").unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn attributes_are_preserved() {
        let mut attributes = BTreeMap::new();
        attributes.insert("color".to_string(), serde_json::json!("yellow"));
        attributes.insert("grade".to_string(), serde_json::json!("HB"));

        let product =
            Product::with_attributes(test_product_id(), "Pencil", attributes.clone()).unwrap();
        assert_eq!(product.attributes(), &attributes);
    }
}
