//! Leafline Storefront - client-side storefront core.
//!
//! This crate implements the testable heart of the Leafline store: the
//! in-memory cart, the checkout flow, order assembly, and the role check -
//! plus the trait boundaries to the external collaborators (document store,
//! identity provider, messaging channel).
//!
//! # Architecture
//!
//! - [`cart`] - In-memory cart with add/adjust/remove and a derived total
//! - [`catalog`] - Read-only projection of the products collection
//! - [`checkout`] - Checkout state machine, order assembly, and the
//!   notification payload handed to the messaging channel
//! - [`session`] - Identity-to-capability resolution (single admin identity)
//! - [`admin`] - Validated admin writes: new products, restock, order status
//! - [`collab`] - Traits the external collaborators implement
//! - [`app`] - [`app::StoreApp`], the explicit application state tying the
//!   pieces together for one client session
//!
//! All core operations are synchronous and purely in-memory; only the
//! collaborator traits are async, and each call is single-shot with no
//! internal retry.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod admin;
pub mod app;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod collab;
pub mod config;
pub mod error;
pub mod session;
pub mod telemetry;

pub use app::StoreApp;
pub use cart::{Cart, CartLine};
pub use config::StoreConfig;
pub use error::{CollaboratorError, Result, StoreError, ValidationError};
