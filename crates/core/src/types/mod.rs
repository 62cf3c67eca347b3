//! Core types for Leafline.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod customer;
pub mod id;
pub mod money;
pub mod order;
pub mod product;
pub mod status;

pub use customer::{CustomerDetails, CustomerDetailsError};
pub use id::*;
pub use order::{Order, OrderItem};
pub use product::{NewProduct, Product};
pub use status::OrderStatus;
