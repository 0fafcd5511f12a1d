//! Core types for Golden Fig.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod identity;
pub mod price;
pub mod quantity;

pub use id::*;
pub use identity::{CustomerId, GUEST_KEY, Identity, IdentityError};
pub use price::{CurrencyCode, Price};
pub use quantity::{Quantity, QuantityError};
