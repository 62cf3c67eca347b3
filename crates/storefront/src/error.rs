//! Unified error handling for the storefront core.
//!
//! Three families, matching how failures are surfaced to the user:
//!
//! - [`ValidationError`] - recovered locally as an inline message; never
//!   changes cart or form state.
//! - [`CollaboratorError`] - an external call failed; surfaced as a
//!   dismissible notice with local state preserved so the user can retry.
//! - [`config::ConfigError`] - fatal at startup; the app must not proceed
//!   past initialization.

use thiserror::Error;

use crate::config;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StoreError {
    /// User input failed a local guard.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An external collaborator call failed.
    #[error("collaborator error: {0}")]
    Collaborator(#[from] CollaboratorError),

    /// Required configuration is missing or invalid.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Locally recoverable validation failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Checkout attempted with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// A sold-out product was added to the cart.
    #[error("{name} is currently sold out")]
    OutOfStock {
        /// Display name of the product.
        name: String,
    },

    /// A product id not present in the catalog was added to the cart.
    #[error("unknown product: {id}")]
    UnknownProduct {
        /// The requested product id.
        id: String,
    },

    /// A required customer field is empty.
    #[error(transparent)]
    Customer(#[from] leafline_core::CustomerDetailsError),

    /// Admin form product name is empty.
    #[error("product name is required")]
    InvalidName,

    /// Admin form price is non-numeric or not positive.
    #[error("price must be a valid number greater than zero")]
    InvalidPrice,

    /// Admin form stock is non-numeric or negative.
    #[error("stock must be a valid number (0 or greater)")]
    InvalidStock,

    /// Admin action attempted without the admin capability.
    #[error("admin capability required")]
    NotAdmin,
}

/// Failures crossing the collaborator boundary.
///
/// Each collaborator call is single-shot: a failure is reported once and any
/// retry is an explicit user action.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    /// A document-store write did not complete.
    #[error("store write failed: {0}")]
    WriteFailed(String),

    /// A collection subscription could not be established or broke.
    #[error("subscription failed: {0}")]
    SubscriptionFailed(String),

    /// The identity provider rejected a sign-in.
    #[error("sign-in failed: {0}")]
    SignInFailed(String),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
