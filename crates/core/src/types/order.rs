//! Order records as submitted to the document store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::order_ref::OrderRef;
use crate::types::customer::CustomerDetails;
use crate::types::id::{ProductId, SessionId};
use crate::types::status::OrderStatus;

/// A single-line item snapshot inside an order.
///
/// Copied from the cart line at submission time; later edits to the source
/// product never reach a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
}

impl OrderItem {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// An immutable submitted purchase request.
///
/// Created exactly once at checkout submission; only `status` ever changes
/// afterwards, and only by admin action through the store. The placement
/// timestamp is assigned by the store on write, so it is not part of this
/// record. Field names match the stored document shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "orderId")]
    pub order_ref: OrderRef,
    #[serde(rename = "customerDetails")]
    pub customer: CustomerDetails,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub status: OrderStatus,
    /// Session that placed the order.
    #[serde(rename = "userId")]
    pub session_id: SessionId,
}
