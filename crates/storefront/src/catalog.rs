//! Read-only projection of the products collection.
//!
//! The catalog is fed by the document-store subscription: each incoming
//! snapshot fully replaces the previous contents (last received wins, no
//! incremental merge). Availability derived here is what gates
//! [`Cart::add_item`](crate::cart::Cart::add_item).

use leafline_core::{Product, ProductId};

/// The client's view of the products collection.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog (no snapshot received yet).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Replace the entire catalog with a new snapshot.
    pub fn replace(&mut self, snapshot: Vec<Product>) {
        self.products = snapshot;
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products in snapshot order (newest first, as delivered).
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: &str, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_owned(),
            price: Decimal::new(100, 2),
            stock,
            image_url: None,
            description: None,
            created_at: None,
        }
    }

    #[test]
    fn test_replace_is_full_swap() {
        let mut catalog = Catalog::new();
        catalog.replace(vec![product("p1", 3), product("p2", 0)]);
        assert_eq!(catalog.products().len(), 2);

        // A later snapshot without p2 drops it entirely
        catalog.replace(vec![product("p1", 1)]);
        assert_eq!(catalog.products().len(), 1);
        assert!(catalog.get(&ProductId::new("p2")).is_none());
    }

    #[test]
    fn test_get_by_id() {
        let mut catalog = Catalog::new();
        catalog.replace(vec![product("p1", 3)]);

        assert!(catalog.get(&ProductId::new("p1")).is_some());
        assert!(catalog.get(&ProductId::new("p9")).is_none());
    }
}
