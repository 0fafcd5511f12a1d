//! Integration tests for Golden Fig.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p golden-fig-integration-tests
//! ```
//!
//! The tests exercise the commerce store end-to-end over a real file-backed
//! storage backend in a temporary directory - no mocks between the store and
//! the bytes on disk.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tempfile::TempDir;

use golden_fig_commerce::storage::JsonFileBackend;
use golden_fig_commerce::store::CommerceStore;
use golden_fig_core::{CustomerId, Identity, ItemId, Quantity};

/// Storage key used by every test store.
pub const STATE_KEY: &str = "commerce_state";

/// A file-backed store rooted in a temporary directory.
///
/// [`TestStore::open`] can be called repeatedly to simulate an application
/// restart over the same on-disk state.
pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    /// Create a fresh empty store directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Open a store handle over the directory.
    ///
    /// # Panics
    ///
    /// Panics if the backend or the persisted state cannot be opened.
    #[must_use]
    pub fn open(&self) -> CommerceStore<JsonFileBackend> {
        let backend =
            JsonFileBackend::open(self.dir.path()).expect("failed to open storage backend");
        CommerceStore::open(backend, STATE_KEY).expect("failed to open commerce store")
    }

    /// Path of the persisted state file.
    #[must_use]
    pub fn state_file(&self) -> std::path::PathBuf {
        self.dir.path().join(format!("{STATE_KEY}.json"))
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for a customer identity.
///
/// # Panics
///
/// Panics if `id` is not a valid customer id.
#[must_use]
pub fn customer(id: &str) -> Identity {
    Identity::Customer(CustomerId::parse(id).expect("invalid customer id"))
}

/// Shorthand for an item id.
#[must_use]
pub fn item(id: &str) -> ItemId {
    ItemId::new(id)
}

/// Shorthand for a quantity.
///
/// # Panics
///
/// Panics if `n` is zero.
#[must_use]
pub fn qty(n: u32) -> Quantity {
    Quantity::new(n).expect("quantity must be positive")
}
