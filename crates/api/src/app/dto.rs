use std::collections::BTreeMap;

use serde::Serialize;

use storefront_catalog::Product;
use storefront_core::Entity;

/// Successful lookup body: identifier and display name, plus the opaque
/// attribute bag when the product carries one.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

pub fn product_to_response(product: &Product) -> ProductResponse {
    ProductResponse {
        id: product.id().to_string(),
        name: product.name().to_string(),
        attributes: product.attributes().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ProductId;

    #[test]
    fn empty_attribute_bag_is_omitted() {
        let product = Product::new(ProductId::new("7").unwrap(), "Pencil").unwrap();
        let body = serde_json::to_string(&product_to_response(&product)).unwrap();
        assert_eq!(body, r#"{"id":"7","name":"Pencil"}"#);
    }

    #[test]
    fn attributes_serialize_in_stable_order() {
        let mut attributes = BTreeMap::new();
        attributes.insert("grade".to_string(), serde_json::json!("HB"));
        attributes.insert("color".to_string(), serde_json::json!("yellow"));

        let product = Product::with_attributes(
            ProductId::new("7").unwrap(),
            "Pencil",
            attributes,
        )
        .unwrap();

        let body = serde_json::to_string(&product_to_response(&product)).unwrap();
        assert_eq!(
            body,
            r#"{"id":"7","name":"Pencil","attributes":{"color":"yellow","grade":"HB"}}"#
        );
    }
}
