//! Product records as stored in the document store.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// A product in the catalog.
///
/// Products are created by admin action and never deleted; stock is mutated
/// by admin restock. Field names match the stored document shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned document ID.
    pub id: ProductId,
    pub name: String,
    /// Unit price, non-negative.
    pub price: Decimal,
    /// Units currently in stock.
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Assigned by the store on write; absent until the write round-trips.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Whether the product can currently be added to a cart.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.stock > 0
    }
}

/// A validated product submission, ready for the document store.
///
/// Unlike [`Product`] it has no ID or creation timestamp; the store assigns
/// both on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: u32) -> Product {
        Product {
            id: ProductId::new("p1"),
            name: "Hibiscus Tea".to_owned(),
            price: Decimal::new(1050, 2),
            stock,
            image_url: None,
            description: None,
            created_at: None,
        }
    }

    #[test]
    fn test_availability_follows_stock() {
        assert!(product(1).is_available());
        assert!(product(50).is_available());
        assert!(!product(0).is_available());
    }

    #[test]
    fn test_document_field_names() {
        let p = Product {
            image_url: Some("https://cdn.example/p1.jpg".to_owned()),
            ..product(3)
        };
        let json = serde_json::to_value(&p).expect("serialize");
        assert_eq!(json["imageUrl"], "https://cdn.example/p1.jpg");
        assert_eq!(json["stock"], 3);
        // Absent optionals are omitted, not null
        assert!(json.get("createdAt").is_none());
    }
}
