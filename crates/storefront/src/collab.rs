//! Collaborator trait boundaries.
//!
//! The storefront core never talks to Firestore-like stores or identity
//! backends directly; it consumes these traits. Snapshot subscriptions are
//! modeled as `watch` channels: each received value is a full replacement of
//! the projection (last received wins), and dropping the receiver is the
//! unsubscribe.
//!
//! Every call is single-shot. A failed write surfaces a
//! [`CollaboratorError`] to the caller; any retry is an explicit user
//! action.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use leafline_core::{DocumentId, NewProduct, Order, OrderStatus, Product, ProductId};

use crate::error::CollaboratorError;
use crate::session::Session;

/// An order as read back from the store: the submitted record plus the
/// store-assigned document id and placement timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub doc_id: DocumentId,
    #[serde(flatten)]
    pub order: Order,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placed_at: Option<DateTime<Utc>>,
}

/// The hosted document store holding the products and orders collections.
///
/// Both collections are scoped under the configured tenant namespace and
/// delivered newest-first. No transactions and no cross-document consistency
/// are required; the store is accepted as eventually consistent.
pub trait DocumentStore {
    /// Insert a new order document. The store assigns the document id and
    /// the placement timestamp.
    fn insert_order(
        &self,
        order: &Order,
    ) -> impl Future<Output = Result<DocumentId, CollaboratorError>> + Send;

    /// Insert a new product document. The store assigns the document id and
    /// the creation timestamp.
    fn insert_product(
        &self,
        product: &NewProduct,
    ) -> impl Future<Output = Result<DocumentId, CollaboratorError>> + Send;

    /// Upsert-merge a product's stock count.
    fn set_stock(
        &self,
        product_id: &ProductId,
        stock: u32,
    ) -> impl Future<Output = Result<(), CollaboratorError>> + Send;

    /// Upsert-merge an order's status.
    fn set_order_status(
        &self,
        doc_id: &DocumentId,
        status: OrderStatus,
    ) -> impl Future<Output = Result<(), CollaboratorError>> + Send;

    /// Subscribe to full-collection product snapshots, newest first.
    fn subscribe_products(&self) -> watch::Receiver<Vec<Product>>;

    /// Subscribe to full-collection order snapshots, newest first.
    fn subscribe_orders(&self) -> watch::Receiver<Vec<OrderRecord>>;
}

/// The third-party identity provider.
///
/// The core never stores credentials; it only reacts to the session each
/// operation yields.
pub trait IdentityProvider {
    /// Email + password sign-in.
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Session, CollaboratorError>> + Send;

    /// Anonymous session bootstrap - the default unauthenticated fallback.
    fn sign_in_anonymous(&self) -> impl Future<Output = Result<Session, CollaboratorError>> + Send;

    /// End the current session.
    fn sign_out(&self) -> impl Future<Output = Result<(), CollaboratorError>> + Send;

    /// Observe sign-in/sign-out events. `None` means no session.
    fn observe(&self) -> watch::Receiver<Option<Session>>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use leafline_core::{CustomerDetails, OrderRef, SessionId};

    use super::*;

    #[test]
    fn test_order_record_flattens_order_fields() {
        let record = OrderRecord {
            doc_id: DocumentId::new("doc1"),
            order: Order {
                order_ref: OrderRef::from_parts("20260830", "AAAAAAA"),
                customer: CustomerDetails::new("A", "1", "L", None::<String>).expect("valid"),
                items: vec![],
                total: Decimal::ZERO,
                status: OrderStatus::Pending,
                session_id: SessionId::new("s1"),
            },
            placed_at: None,
        };

        let json = serde_json::to_value(&record).expect("serialize");
        // Stored document shape: order fields at the top level next to docId
        assert_eq!(json["docId"], "doc1");
        assert_eq!(json["orderId"], "ORD-20260830-AAAAAAA");
        assert_eq!(json["status"], "PENDING");
    }
}
