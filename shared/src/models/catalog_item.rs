//! Catalog Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu entry supplied by the catalog collaborator
///
/// Read-only from the order engine's point of view. Line items only keep the `id` as
/// a back-reference and copy `name` / `price` at add time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    /// Unit price in the store currency (non-negative)
    pub price: Decimal,
    /// Whether the kitchen can currently serve this item
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Menu section (e.g. "Makanan", "Minuman")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

fn default_true() -> bool {
    true
}

impl CatalogItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            available: true,
            description: None,
            category: None,
        }
    }

    /// Builder-style availability toggle
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_defaults_to_true_when_missing() {
        let item: CatalogItem =
            serde_json::from_str(r#"{"id":"m1","name":"Nasi Goreng","price":25000}"#).unwrap();
        assert!(item.available);
        assert_eq!(item.price, Decimal::from(25000));
        assert!(item.description.is_none());
    }
}
