//! Store error taxonomy.
//!
//! Deliberately small: removing or updating something that does not exist is
//! a no-op, not an error, and mutations never fail on valid input. The only
//! refusals are identity-gated operations called as guest, and storage
//! failures while opening a store.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors returned by the commerce store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The operation needs a signed-in customer and was called as guest.
    ///
    /// Carries the operation name for logging; callers are expected to
    /// surface [`StoreError::user_message`] and redirect to sign-in. No
    /// state was changed.
    #[error("operation `{0}` requires a signed-in customer")]
    IdentityRequired(&'static str),

    /// Durable storage failed while opening or loading the store.
    ///
    /// Persistence failures *during* a mutation are not surfaced here; the
    /// in-memory state keeps the mutation and the failure is logged as a
    /// warning instead.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl StoreError {
    /// Message suitable for showing to the end user.
    ///
    /// Internal details (paths, serde messages) are not exposed.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::IdentityRequired("wishlist") => {
                "Sign in to add items to your wishlist".to_owned()
            }
            Self::IdentityRequired(_) => "Sign in to save items for later".to_owned(),
            Self::Storage(_) => "Something went wrong loading your cart".to_owned(),
        }
    }
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
