//! CLI command implementations.

pub mod cart;
pub mod coupon;
pub mod inbox;
pub mod saved;
pub mod wishlist;

use thiserror::Error;

use golden_fig_commerce::StoreError;
use golden_fig_commerce::config::{CommerceConfig, ConfigError};
use golden_fig_commerce::storage::{JsonFileBackend, StorageError};
use golden_fig_commerce::store::CommerceStore;
use golden_fig_core::{CustomerId, Identity, IdentityError, Quantity, QuantityError};

/// Errors that can occur while running a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The storage backend could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The store refused the operation.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// The `--user` value is not a valid customer id.
    #[error("Invalid customer id: {0}")]
    InvalidIdentity(#[from] IdentityError),

    /// The quantity is not a valid line quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(#[from] QuantityError),

    /// The coupon payload is not valid JSON.
    #[error("Invalid coupon payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// Open the file-backed store configured by the environment.
pub fn open_store() -> Result<CommerceStore<JsonFileBackend>, CliError> {
    let config = CommerceConfig::from_env()?;
    let backend = JsonFileBackend::open(&config.data_dir)?;
    Ok(CommerceStore::open(backend, config.state_key)?)
}

/// Resolve the `--user` flag: absent means guest.
pub fn resolve_identity(user: Option<&str>) -> Result<Identity, CliError> {
    match user {
        Some(id) => Ok(Identity::Customer(CustomerId::parse(id)?)),
        None => Ok(Identity::Guest),
    }
}

/// Parse a `--quantity` flag.
pub fn parse_quantity(quantity: u32) -> Result<Quantity, CliError> {
    Ok(Quantity::try_from(quantity)?)
}
