//! Checkout flow: state machine, order assembly, and the payment handoff
//! message.
//!
//! Assembly is the one moment the cart is turned into something durable: the
//! order's items and total are copied once, at call time, and later mutation
//! of the cart or of product records never reaches a built order. The
//! rendered message is only formatted here - the messaging channel
//! collaborator is responsible for actually opening the link.

use leafline_core::types::money;
use leafline_core::{CustomerDetails, Order, OrderItem, OrderRef, OrderStatus, SessionId};

use crate::cart::Cart;
use crate::error::ValidationError;

/// Client-local checkout progression.
///
/// `Submitted` is terminal; [`CheckoutFlow::finish`] returns the flow to
/// `Browsing` for the next order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutStage {
    #[default]
    Browsing,
    CartReview,
    CheckoutForm,
    Submitted,
}

/// The checkout state machine for one client session.
///
/// Guarded transitions fail with a [`ValidationError`] and leave the stage
/// unchanged; the caller surfaces the message and the user stays where they
/// were.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckoutFlow {
    stage: CheckoutStage,
}

impl CheckoutFlow {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stage: CheckoutStage::Browsing,
        }
    }

    #[must_use]
    pub const fn stage(&self) -> CheckoutStage {
        self.stage
    }

    /// Cart-view request: always allowed.
    pub const fn view_cart(&mut self) {
        self.stage = CheckoutStage::CartReview;
    }

    /// Proceed from cart review to the checkout form.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyCart`] (stage unchanged) if the cart
    /// has no lines.
    pub fn proceed_to_checkout(&mut self, cart: &Cart) -> Result<(), ValidationError> {
        if cart.is_empty() {
            return Err(ValidationError::EmptyCart);
        }
        self.stage = CheckoutStage::CheckoutForm;
        Ok(())
    }

    /// Record a successful order write.
    pub const fn submitted(&mut self) {
        self.stage = CheckoutStage::Submitted;
    }

    /// Leave the terminal state and return to browsing.
    pub const fn finish(&mut self) {
        self.stage = CheckoutStage::Browsing;
    }

    /// Explicit cancel / continue-shopping from any state.
    pub const fn cancel(&mut self) {
        self.stage = CheckoutStage::Browsing;
    }
}

/// Raw values from the checkout form.
#[derive(Debug, Clone, Default)]
pub struct CustomerForm {
    pub name: String,
    pub phone: String,
    pub location: String,
    pub notes: String,
}

impl CustomerForm {
    /// Validate the form into [`CustomerDetails`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError::Customer`] naming the first missing
    /// required field.
    pub fn to_details(&self) -> Result<CustomerDetails, ValidationError> {
        let notes = if self.notes.trim().is_empty() {
            None
        } else {
            Some(self.notes.clone())
        };
        CustomerDetails::new(self.name.clone(), self.phone.clone(), self.location.clone(), notes)
            .map_err(ValidationError::from)
    }
}

/// Assemble an immutable order from the cart state at call time.
///
/// Item snapshots are copied from the cart lines and the total is computed
/// exactly once. The order starts as [`OrderStatus::Pending`]; the placement
/// timestamp is assigned by the store on write.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyCart`] if the cart has no lines.
pub fn build_order(
    cart: &Cart,
    customer: &CustomerDetails,
    session_id: &SessionId,
    order_ref: OrderRef,
) -> Result<Order, ValidationError> {
    if cart.is_empty() {
        return Err(ValidationError::EmptyCart);
    }

    let items: Vec<OrderItem> = cart
        .lines()
        .iter()
        .map(|line| OrderItem {
            id: line.product_id.clone(),
            name: line.name.clone(),
            quantity: line.quantity,
            price: line.price,
        })
        .collect();

    Ok(Order {
        order_ref,
        customer: customer.clone(),
        items,
        total: cart.total(),
        status: OrderStatus::Pending,
        session_id: session_id.clone(),
    })
}

/// Render the human-readable payment-confirmation message for an order.
///
/// Fixed template carrying the business name, order reference, total,
/// customer name, delivery location, and one line per item. The customer
/// sends this over the messaging channel and quotes the order reference as
/// their payment narration.
#[must_use]
pub fn notification_message(order: &Order, business_name: &str, currency_symbol: &str) -> String {
    let items_list: String = order
        .items
        .iter()
        .map(|item| {
            format!(
                "\n- {} x {} (@ {})",
                item.name,
                item.quantity,
                money::format(item.price, currency_symbol)
            )
        })
        .collect();

    format!(
        "Hello! I am placing an order from {business_name}.\n\n\
         *Order ID:* {order_ref}\n\
         *Total Amount:* {total}\n\
         *Customer:* {customer}\n\
         *Delivery Location:* {location}\n\n\
         *Items Ordered:*{items_list}\n\n\
         I will proceed with payment using the Order ID as reference. \
         Please confirm availability!",
        order_ref = order.order_ref,
        total = money::format(order.total, currency_symbol),
        customer = order.customer.name(),
        location = order.customer.location(),
    )
}

/// Build the prefilled messaging link for a rendered message.
///
/// The message is carried URL-encoded in the `text` query parameter. This
/// only formats the link; nothing is sent.
#[must_use]
pub fn notification_link(destination: &str, message: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(message.as_bytes()).collect();
    format!("https://wa.me/{destination}?text={encoded}")
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use leafline_core::{Product, ProductId};

    use super::*;

    fn product(id: &str, price_cents: i64, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Decimal::new(price_cents, 2),
            stock,
            image_url: None,
            description: None,
            created_at: None,
        }
    }

    fn customer() -> CustomerDetails {
        CustomerDetails::new("A", "1", "L", None::<String>).expect("valid")
    }

    #[test]
    fn test_build_order_rejects_empty_cart() {
        let cart = Cart::new();
        let err = build_order(
            &cart,
            &customer(),
            &SessionId::new("s1"),
            OrderRef::from_parts("20260830", "AAAAAAA"),
        )
        .unwrap_err();

        assert_eq!(err, ValidationError::EmptyCart);
    }

    #[test]
    fn test_build_order_snapshots_cart() {
        let mut cart = Cart::new();
        let p1 = product("p1", 1000, 5);
        for _ in 0..3 {
            cart.add_item(&p1).expect("in stock");
        }

        let order = build_order(
            &cart,
            &customer(),
            &SessionId::new("s1"),
            OrderRef::from_parts("20260830", "AAAAAAA"),
        )
        .expect("non-empty cart");

        assert_eq!(order.total, Decimal::new(3000, 2));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].id, ProductId::new("p1"));
        assert_eq!(order.items[0].quantity, 3);
        assert_eq!(order.items[0].price, Decimal::new(1000, 2));

        // Mutating the source cart afterwards never touches the order
        cart.clear();
        assert_eq!(order.total, Decimal::new(3000, 2));
        assert_eq!(order.items[0].quantity, 3);
    }

    #[test]
    fn test_order_total_matches_cart_total_at_call_time() {
        let mut cart = Cart::new();
        cart.add_item(&product("p1", 1050, 9)).expect("in stock");
        cart.add_item(&product("p2", 250, 9)).expect("in stock");
        cart.add_item(&product("p2", 250, 9)).expect("in stock");

        let expected = cart.total();
        let order = build_order(
            &cart,
            &customer(),
            &SessionId::new("s1"),
            OrderRef::from_parts("20260830", "AAAAAAA"),
        )
        .expect("non-empty cart");

        assert_eq!(order.total, expected);
        let item_sum: Decimal = order.items.iter().map(OrderItem::line_total).sum();
        assert_eq!(item_sum, order.total);
    }

    #[test]
    fn test_notification_message_template() {
        let mut cart = Cart::new();
        let p1 = product("p1", 1000, 5);
        cart.add_item(&p1).expect("in stock");
        cart.add_item(&p1).expect("in stock");

        let details =
            CustomerDetails::new("Ada", "080123", "12 Market Rd", None::<String>).expect("valid");
        let order = build_order(
            &cart,
            &details,
            &SessionId::new("s1"),
            OrderRef::from_parts("20260830", "K3F9Q1Z"),
        )
        .expect("non-empty cart");

        let message = notification_message(&order, "Hattoky Herbal Care", "₦");

        assert!(message.starts_with("Hello! I am placing an order from Hattoky Herbal Care."));
        assert!(message.contains("*Order ID:* ORD-20260830-K3F9Q1Z"));
        assert!(message.contains("*Total Amount:* ₦20.00"));
        assert!(message.contains("*Customer:* Ada"));
        assert!(message.contains("*Delivery Location:* 12 Market Rd"));
        assert!(message.contains("\n- Product p1 x 2 (@ ₦10.00)"));
        assert!(message.ends_with("Please confirm availability!"));
    }

    #[test]
    fn test_notification_link_is_url_escaped() {
        let link = notification_link("2349150000000", "Hello! *Order ID:* ORD-1");

        assert!(link.starts_with("https://wa.me/2349150000000?text="));
        // Raw spaces and reserved characters never appear in the query
        let query = link.split('?').nth(1).expect("has query");
        assert!(!query.contains(' '));
        assert!(query.contains("Hello%21"));
        assert!(query.contains("%3A")); // the colon in "Order ID:"
    }

    #[test]
    fn test_flow_guards() {
        let mut flow = CheckoutFlow::new();
        assert_eq!(flow.stage(), CheckoutStage::Browsing);

        flow.view_cart();
        assert_eq!(flow.stage(), CheckoutStage::CartReview);

        // Empty cart blocks checkout and the stage does not advance
        let empty = Cart::new();
        assert!(flow.proceed_to_checkout(&empty).is_err());
        assert_eq!(flow.stage(), CheckoutStage::CartReview);

        let mut cart = Cart::new();
        cart.add_item(&product("p1", 1000, 5)).expect("in stock");
        flow.proceed_to_checkout(&cart).expect("non-empty cart");
        assert_eq!(flow.stage(), CheckoutStage::CheckoutForm);

        flow.submitted();
        assert_eq!(flow.stage(), CheckoutStage::Submitted);
        flow.finish();
        assert_eq!(flow.stage(), CheckoutStage::Browsing);
    }

    #[test]
    fn test_cancel_from_any_state() {
        let mut flow = CheckoutFlow::new();
        flow.view_cart();
        flow.cancel();
        assert_eq!(flow.stage(), CheckoutStage::Browsing);

        let mut cart = Cart::new();
        cart.add_item(&product("p1", 1000, 5)).expect("in stock");
        flow.view_cart();
        flow.proceed_to_checkout(&cart).expect("non-empty cart");
        flow.cancel();
        assert_eq!(flow.stage(), CheckoutStage::Browsing);
    }
}
