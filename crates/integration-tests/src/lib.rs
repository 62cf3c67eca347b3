//! Integration tests for Leafline.
//!
//! This crate provides in-memory fakes for the two external collaborators -
//! the document store and the identity provider - so the full storefront
//! flow can be exercised end to end without any hosted services. The
//! scenarios themselves live under `tests/`.
//!
//! # Test Categories
//!
//! - `cart_scenarios` - The cart/total user journeys
//! - `checkout_flow` - Checkout state machine and order placement
//! - `admin_flow` - Admin product, restock, and order-status actions

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use tokio::sync::watch;
use uuid::Uuid;

use leafline_core::{DocumentId, NewProduct, Order, OrderStatus, Product, ProductId};
use leafline_storefront::collab::{DocumentStore, IdentityProvider, OrderRecord};
use leafline_storefront::error::CollaboratorError;
use leafline_storefront::session::Session;

/// In-memory stand-in for the hosted document store.
///
/// Writes mutate local collections and publish a fresh full-collection
/// snapshot on the corresponding `watch` channel, newest first, the way the
/// real store's subscription delivers them. `fail_writes` simulates a store
/// outage: every write errors and no snapshot is published.
pub struct FakeStore {
    products: Mutex<Vec<Product>>,
    orders: Mutex<Vec<OrderRecord>>,
    products_tx: watch::Sender<Vec<Product>>,
    orders_tx: watch::Sender<Vec<OrderRecord>>,
    fail_writes: AtomicBool,
}

impl Default for FakeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeStore {
    #[must_use]
    pub fn new() -> Self {
        let (products_tx, _) = watch::channel(Vec::new());
        let (orders_tx, _) = watch::channel(Vec::new());
        Self {
            products: Mutex::new(Vec::new()),
            orders: Mutex::new(Vec::new()),
            products_tx,
            orders_tx,
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Seed the products collection directly, bypassing validation, and
    /// publish the snapshot.
    pub fn seed_products(&self, products: Vec<Product>) {
        let mut guard = self.products.lock().expect("products lock");
        *guard = products;
        self.products_tx.send_replace(guard.clone());
    }

    /// Make every subsequent write fail with a collaborator error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of orders the store currently holds.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.orders.lock().expect("orders lock").len()
    }

    /// Snapshot of a stored order by document id.
    #[must_use]
    pub fn order(&self, doc_id: &DocumentId) -> Option<OrderRecord> {
        self.orders
            .lock()
            .expect("orders lock")
            .iter()
            .find(|record| &record.doc_id == doc_id)
            .cloned()
    }

    fn check_writes(&self) -> Result<(), CollaboratorError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(CollaboratorError::WriteFailed(
                "simulated store outage".to_owned(),
            ))
        } else {
            Ok(())
        }
    }
}

impl DocumentStore for FakeStore {
    async fn insert_order(&self, order: &Order) -> Result<DocumentId, CollaboratorError> {
        self.check_writes()?;
        let doc_id = DocumentId::new(Uuid::new_v4().to_string());
        let record = OrderRecord {
            doc_id: doc_id.clone(),
            order: order.clone(),
            placed_at: Some(Utc::now()),
        };
        let mut guard = self.orders.lock().expect("orders lock");
        guard.insert(0, record);
        self.orders_tx.send_replace(guard.clone());
        Ok(doc_id)
    }

    async fn insert_product(&self, product: &NewProduct) -> Result<DocumentId, CollaboratorError> {
        self.check_writes()?;
        let doc_id = DocumentId::new(Uuid::new_v4().to_string());
        let stored = Product {
            id: ProductId::new(doc_id.as_str()),
            name: product.name.clone(),
            price: product.price,
            stock: product.stock,
            image_url: product.image_url.clone(),
            description: product.description.clone(),
            created_at: Some(Utc::now()),
        };
        let mut guard = self.products.lock().expect("products lock");
        guard.insert(0, stored);
        self.products_tx.send_replace(guard.clone());
        Ok(doc_id)
    }

    async fn set_stock(
        &self,
        product_id: &ProductId,
        stock: u32,
    ) -> Result<(), CollaboratorError> {
        self.check_writes()?;
        let mut guard = self.products.lock().expect("products lock");
        let product = guard
            .iter_mut()
            .find(|p| &p.id == product_id)
            .ok_or_else(|| {
                CollaboratorError::WriteFailed(format!("no such product: {product_id}"))
            })?;
        product.stock = stock;
        self.products_tx.send_replace(guard.clone());
        Ok(())
    }

    async fn set_order_status(
        &self,
        doc_id: &DocumentId,
        status: OrderStatus,
    ) -> Result<(), CollaboratorError> {
        self.check_writes()?;
        let mut guard = self.orders.lock().expect("orders lock");
        let record = guard
            .iter_mut()
            .find(|r| &r.doc_id == doc_id)
            .ok_or_else(|| CollaboratorError::WriteFailed(format!("no such order: {doc_id}")))?;
        record.order.status = status;
        self.orders_tx.send_replace(guard.clone());
        Ok(())
    }

    fn subscribe_products(&self) -> watch::Receiver<Vec<Product>> {
        self.products_tx.subscribe()
    }

    fn subscribe_orders(&self) -> watch::Receiver<Vec<OrderRecord>> {
        self.orders_tx.subscribe()
    }
}

/// In-memory stand-in for the identity provider.
///
/// One registered email/password credential maps to a fixed uid; anonymous
/// sign-in mints a fresh uid. Session changes are pushed on the observation
/// channel the way the real provider notifies sign-in and sign-out.
pub struct FakeIdentity {
    email: String,
    password: String,
    uid: String,
    session_tx: watch::Sender<Option<Session>>,
}

impl FakeIdentity {
    #[must_use]
    pub fn new(email: &str, password: &str, uid: &str) -> Self {
        let (session_tx, _) = watch::channel(None);
        Self {
            email: email.to_owned(),
            password: password.to_owned(),
            uid: uid.to_owned(),
            session_tx,
        }
    }
}

impl IdentityProvider for FakeIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, CollaboratorError> {
        if email == self.email && password == self.password {
            let session = Session::signed_in(self.uid.as_str());
            self.session_tx.send_replace(Some(session.clone()));
            Ok(session)
        } else {
            Err(CollaboratorError::SignInFailed(
                "invalid email or password".to_owned(),
            ))
        }
    }

    async fn sign_in_anonymous(&self) -> Result<Session, CollaboratorError> {
        let session = Session::anonymous(Uuid::new_v4().to_string());
        self.session_tx.send_replace(Some(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), CollaboratorError> {
        self.session_tx.send_replace(None);
        Ok(())
    }

    fn observe(&self) -> watch::Receiver<Option<Session>> {
        self.session_tx.subscribe()
    }
}

/// Build a product record for seeding.
#[must_use]
pub fn product(id: &str, price_cents: i64, stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        price: rust_decimal::Decimal::new(price_cents, 2),
        stock,
        image_url: None,
        description: None,
        created_at: Some(Utc::now()),
    }
}
