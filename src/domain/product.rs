//! Product domain entity and its transport record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Product domain entity.
///
/// The identifier is assigned once in [`Product::new`] and has no setter;
/// price changes go through [`Product::update_price`].
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: Uuid,
    name: String,
    price: f64,
}

impl Product {
    /// Create a new product with a freshly generated identifier
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Change the product price
    pub fn update_price(&mut self, price: f64) {
        self.price = price;
    }
}

/// Flat product representation used at the HTTP boundary.
///
/// `id` defaults to the nil UUID when omitted from a request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductRecord {
    /// Product identifier (server generated, ignored on create)
    #[serde(default)]
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Product name
    #[schema(example = "Widget")]
    pub name: String,
    /// Unit price
    #[schema(example = 9.99)]
    pub price: f64,
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
        }
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_products_get_distinct_ids() {
        let a = Product::new("Widget", 9.99);
        let b = Product::new("Widget", 9.99);
        assert_ne!(a.id(), b.id());
        assert_ne!(a.id(), Uuid::nil());
    }

    #[test]
    fn test_update_price_keeps_identity_and_name() {
        let mut product = Product::new("Gadget", 10.0);
        let id = product.id();

        product.update_price(12.5);

        assert_eq!(product.id(), id);
        assert_eq!(product.name(), "Gadget");
        assert_eq!(product.price(), 12.5);
    }

    #[test]
    fn test_record_projection() {
        let product = Product::new("Widget", 9.99);
        let record = ProductRecord::from(&product);
        assert_eq!(record.id, product.id());
        assert_eq!(record.name, "Widget");
        assert_eq!(record.price, 9.99);
    }

    #[test]
    fn test_record_without_id_deserializes_to_nil() {
        let record: ProductRecord =
            serde_json::from_str(r#"{"name":"Widget","price":9.99}"#).unwrap();
        assert_eq!(record.id, Uuid::nil());
    }
}
