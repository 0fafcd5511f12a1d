//! Golden Fig Commerce - Per-user commerce state store.
//!
//! This crate owns four per-user collections - cart lines, save-for-later
//! lines, wishlist entries, and a notification inbox - plus a per-user
//! coupon association. It is a synchronous in-memory store: every mutation
//! runs to completion and serializes the full state to a durable-storage
//! backend before returning.
//!
//! # Architecture
//!
//! - [`line`], [`wishlist`], [`notifications`], [`coupon`] hold the data
//!   types and *pure* collection functions (slice in, `Vec` out). They know
//!   nothing about persistence.
//! - [`store`] wraps those functions in [`store::CommerceStore`], the only
//!   mutation surface, and persists after every change.
//! - [`storage`] is the durable-storage contract (`save`/`load` of an opaque
//!   blob) with file-backed and in-memory implementations.
//! - [`catalog`] is the read-only product/stock collaborator contract; the
//!   store itself never consults it.
//!
//! Collections are copy-on-write: reads hand out `Arc<[T]>` snapshots that
//! are never mutated behind the caller's back.
//!
//! # Example
//!
//! ```
//! use golden_fig_commerce::storage::MemoryBackend;
//! use golden_fig_commerce::store::CommerceStore;
//! use golden_fig_core::{Identity, ItemId, Quantity};
//!
//! let mut store = CommerceStore::open(MemoryBackend::new(), "commerce_state")?;
//! store.add_to_cart(&Identity::Guest, ItemId::new("almond-250g"), Quantity::ONE);
//! assert_eq!(store.cart(&Identity::Guest).len(), 1);
//! # Ok::<(), golden_fig_commerce::StoreError>(())
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod ack;
pub mod catalog;
pub mod config;
pub mod coupon;
pub mod error;
pub mod line;
pub mod notifications;
pub mod storage;
pub mod store;
pub mod wishlist;

pub use ack::Ack;
pub use coupon::CouponRecord;
pub use error::{Result, StoreError};
pub use line::Line;
pub use notifications::{Notification, NotificationDraft};
pub use store::CommerceStore;
