//! Explicit application state for one client session.
//!
//! [`StoreApp`] replaces the ambient mutable state a long-lived UI process
//! would hold: the cart, the catalog and orders projections, the checkout
//! stage, and the current session all live in one value that operations are
//! invoked on. Collaborators come in through the trait boundary, so tests
//! drive the whole flow against in-memory fakes.

use tokio::sync::watch;

use leafline_core::{
    CustomerDetails, DocumentId, Order, OrderRef, OrderStatus, Product, ProductId, SessionId,
};

use crate::admin::{self, ProductForm};
use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::checkout::{self, CheckoutFlow, CheckoutStage, CustomerForm};
use crate::collab::{DocumentStore, OrderRecord};
use crate::config::StoreConfig;
use crate::error::{CollaboratorError, Result, StoreError, ValidationError};
use crate::session::{self, Session};

/// Owning session id recorded when an order is somehow placed without a
/// session. Matches the stored sentinel the orders collection already uses.
const GUEST_SESSION: &str = "guest-error";

/// The result of a successful order placement.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    /// The submitted order record.
    pub order: Order,
    /// Store-assigned document id.
    pub doc_id: DocumentId,
    /// Prefilled messaging link for the payment-confirmation handoff.
    pub notification_link: String,
}

/// Application state for one client session, generic over the document
/// store collaborator.
pub struct StoreApp<D: DocumentStore> {
    config: StoreConfig,
    store: D,
    catalog: Catalog,
    orders: Vec<OrderRecord>,
    cart: Cart,
    flow: CheckoutFlow,
    session: Option<Session>,
    products_rx: watch::Receiver<Vec<Product>>,
    orders_rx: watch::Receiver<Vec<OrderRecord>>,
}

impl<D: DocumentStore> StoreApp<D> {
    /// Create the application state and subscribe to both collections.
    pub fn new(config: StoreConfig, store: D) -> Self {
        let products_rx = store.subscribe_products();
        let orders_rx = store.subscribe_orders();
        Self {
            config,
            store,
            catalog: Catalog::new(),
            orders: Vec::new(),
            cart: Cart::new(),
            flow: CheckoutFlow::new(),
            session: None,
            products_rx,
            orders_rx,
        }
    }

    /// Direct access to the document-store collaborator.
    #[must_use]
    pub const fn store(&self) -> &D {
        &self.store
    }

    /// Pull the latest collection snapshots into the local projections.
    ///
    /// Each snapshot fully replaces the projection it feeds. A broken orders
    /// subscription only degrades the orders view (logged, last snapshot
    /// kept); a broken products subscription is surfaced to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`CollaboratorError::SubscriptionFailed`] if the products
    /// subscription has been dropped.
    pub fn refresh(&mut self) -> Result<()> {
        match self.products_rx.has_changed() {
            Ok(true) => {
                let snapshot = self.products_rx.borrow_and_update().clone();
                self.catalog.replace(snapshot);
            }
            Ok(false) => {}
            Err(_) => {
                return Err(StoreError::Collaborator(
                    CollaboratorError::SubscriptionFailed("products subscription closed".into()),
                ));
            }
        }

        match self.orders_rx.has_changed() {
            Ok(true) => {
                self.orders = self.orders_rx.borrow_and_update().clone();
            }
            Ok(false) => {}
            Err(_) => {
                // Degrade to a stale orders list without blocking the rest
                // of the app.
                tracing::warn!("orders subscription closed; orders list not updating");
            }
        }

        Ok(())
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// React to an identity-provider event.
    pub fn set_session(&mut self, session: Option<Session>) {
        self.session = session;
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether the current session carries the admin capability.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        session::is_admin(self.session.as_ref(), &self.config)
    }

    // =========================================================================
    // Browsing and cart
    // =========================================================================

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Orders projection (newest first, as delivered by the store).
    #[must_use]
    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn stage(&self) -> CheckoutStage {
        self.flow.stage()
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// # Errors
    ///
    /// [`ValidationError::UnknownProduct`] if the id is not in the catalog;
    /// [`ValidationError::OutOfStock`] if the product is sold out.
    pub fn add_to_cart(&mut self, product_id: &ProductId) -> Result<()> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| ValidationError::UnknownProduct {
                id: product_id.to_string(),
            })?;
        self.cart.add_item(product)?;
        Ok(())
    }

    /// Adjust a cart line by a signed delta; quantity zero removes the line.
    pub fn adjust_quantity(&mut self, product_id: &ProductId, delta: i64) {
        self.cart.adjust_quantity(product_id, delta);
    }

    /// Cart-view request.
    pub fn view_cart(&mut self) {
        self.flow.view_cart();
    }

    /// Proceed from cart review to the checkout form.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyCart`] if the cart has no lines.
    pub fn proceed_to_checkout(&mut self) -> Result<()> {
        self.flow.proceed_to_checkout(&self.cart)?;
        Ok(())
    }

    /// Cancel / continue shopping: back to browsing from any stage. The cart
    /// is kept.
    pub fn cancel_checkout(&mut self) {
        self.flow.cancel();
    }

    // =========================================================================
    // Order placement
    // =========================================================================

    /// Validate the checkout form, assemble the order, write it to the
    /// store, and produce the messaging handoff link.
    ///
    /// On success the cart is cleared and the flow returns to browsing. On
    /// any failure the cart, the form's validity, and the checkout stage are
    /// all preserved so the user can retry the same action.
    ///
    /// # Errors
    ///
    /// [`ValidationError`] for an empty cart or missing customer field;
    /// [`CollaboratorError::WriteFailed`] if the store write fails.
    pub async fn place_order(&mut self, form: &CustomerForm) -> Result<PlacedOrder> {
        let customer = form.to_details()?;
        let order = self.assemble_order(&customer)?;

        let doc_id = self.store.insert_order(&order).await?;
        self.flow.submitted();

        let message = checkout::notification_message(
            &order,
            &self.config.business_name,
            &self.config.currency_symbol,
        );
        let notification_link =
            checkout::notification_link(&self.config.whatsapp_number, &message);

        tracing::info!(
            order_ref = %order.order_ref,
            total = %order.total,
            items = order.items.len(),
            "order placed"
        );

        self.cart.clear();
        self.flow.finish();

        Ok(PlacedOrder {
            order,
            doc_id,
            notification_link,
        })
    }

    fn assemble_order(&self, customer: &CustomerDetails) -> Result<Order> {
        let session_id = self.session.as_ref().map_or_else(
            || SessionId::new(GUEST_SESSION),
            |session| session.uid.clone(),
        );
        let order = checkout::build_order(&self.cart, customer, &session_id, OrderRef::generate())?;
        Ok(order)
    }

    // =========================================================================
    // Admin
    // =========================================================================

    /// Validate and submit a new product. Admin only.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NotAdmin`] without the capability, otherwise the
    /// form validation or store errors.
    pub async fn add_product(&self, form: &ProductForm) -> Result<DocumentId> {
        self.require_admin()?;
        admin::add_product(&self.store, form).await
    }

    /// Set a product's stock to a new total. Admin only.
    pub async fn restock(&self, product_id: &ProductId, raw_stock: &str) -> Result<u32> {
        self.require_admin()?;
        admin::restock(&self.store, product_id, raw_stock).await
    }

    /// Transition an order's status. Admin only.
    pub async fn update_order_status(
        &self,
        doc_id: &DocumentId,
        status: OrderStatus,
    ) -> Result<()> {
        self.require_admin()?;
        admin::update_order_status(&self.store, doc_id, status).await
    }

    fn require_admin(&self) -> Result<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(ValidationError::NotAdmin.into())
        }
    }
}
