//! Golden Fig Core - Shared types library.
//!
//! This crate provides common types used across all Golden Fig components:
//! - `commerce` - Per-user commerce state store (cart, wishlist, inbox)
//! - `cli` - Command-line tools for inspecting and mutating a store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe ids, identities, quantities,
//!   and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
