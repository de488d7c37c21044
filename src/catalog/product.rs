//! Product types.

use serde::{Deserialize, Serialize};
use std::fmt;

pub type ProductId = u64;

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in the smallest currency unit.
    #[serde(default)]
    pub price_cents: u64,
    #[serde(default)]
    pub stock: u32,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{id:{}, name:{}}}", self.id, self.name)
    }
}

/// Payload for creating or replacing a product.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price_cents: u64,
    pub stock: u32,
}

impl NewProduct {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price_cents: self.price_cents,
            stock: self.stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let p = NewProduct::named("Widget").into_product(42);
        assert_eq!(p.to_string(), "{id:42, name:Widget}");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let p: Product = serde_json::from_str(r#"{"id":1,"name":"Gadget"}"#).unwrap();
        assert_eq!(p.price_cents, 0);
        assert_eq!(p.stock, 0);
        assert!(p.description.is_empty());
    }
}
