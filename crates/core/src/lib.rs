//! Leafline Core - Shared types library.
//!
//! This crate provides common types used across all Leafline components:
//! - `storefront` - Cart, checkout flow, and collaborator interfaces
//! - `integration-tests` - End-to-end scenarios against fake collaborators
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! document-store access, no channels. This keeps it lightweight and allows
//! it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money formatting,
//!   statuses, and the product/order records stored in the document store
//! - [`order_ref`] - Human-readable payment reference generation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod order_ref;
pub mod types;

pub use order_ref::OrderRef;
pub use types::*;
