//! In-memory shopping cart.
//!
//! The cart lives only in client memory for the duration of a session. It is
//! single-writer and single-reader; every mutation goes through the methods
//! here so the invariants hold for any call sequence:
//!
//! - at most one line per product id
//! - every line has quantity >= 1 (a line driven to zero is removed)
//! - `total()` is recomputed from the lines, never cached

use rust_decimal::Decimal;

use leafline_core::{Product, ProductId};

use crate::error::ValidationError;

/// One product entry in the cart with its requested quantity.
///
/// Carries a snapshot of the product's id, name, and price taken when the
/// line was created; the snapshot is what ends up on the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The session's cart: an ordered collection of [`CartLine`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of a product to the cart.
    ///
    /// If the product already has a line its quantity is incremented by 1;
    /// otherwise a new line with quantity 1 is appended. Quantity increments
    /// are not re-checked against remaining stock.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfStock`] without mutating the cart if
    /// the product has no stock.
    pub fn add_item(&mut self, product: &Product) -> Result<(), ValidationError> {
        if !product.is_available() {
            return Err(ValidationError::OutOfStock {
                name: product.name.clone(),
            });
        }

        if let Some(line) = self.line_mut(&product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                quantity: 1,
            });
        }
        Ok(())
    }

    /// Adjust a line's quantity by a signed delta.
    ///
    /// No-op if the product has no line. A resulting quantity of zero or
    /// below removes the line entirely. No upper bound is enforced.
    pub fn adjust_quantity(&mut self, product_id: &ProductId, delta: i64) {
        let Some(position) = self
            .lines
            .iter()
            .position(|line| &line.product_id == product_id)
        else {
            return;
        };

        let Some(line) = self.lines.get_mut(position) else {
            return;
        };

        let new_quantity = i64::from(line.quantity) + delta;
        if new_quantity <= 0 {
            self.lines.remove(position);
        } else {
            line.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        }
    }

    /// Sum of `price x quantity` over all lines; zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Remove every line. Used after a successful order placement.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (not total units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| &line.product_id == product_id)
    }
}
