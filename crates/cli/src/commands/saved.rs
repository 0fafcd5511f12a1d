//! Save-for-later vault commands.
//!
//! The vault is per-account: every command here takes a required `--user`.

use golden_fig_core::{CustomerId, Identity, ItemId};

use super::{CliError, open_store, parse_quantity};

fn identity(user: &str) -> Result<Identity, CliError> {
    Ok(Identity::Customer(CustomerId::parse(user)?))
}

/// Print the vault for a customer.
pub fn list(user: &str) -> Result<(), CliError> {
    let identity = identity(user)?;
    let store = open_store()?;
    let saved = store.saved(&identity);

    if saved.is_empty() {
        tracing::info!("Vault for {identity} is empty");
        return Ok(());
    }

    tracing::info!("Vault for {identity}:");
    for line in saved.iter() {
        tracing::info!("  {} x{}", line.item, line.quantity);
    }
    Ok(())
}

/// Save an item for later.
pub fn add(item: &str, quantity: u32, user: &str) -> Result<(), CliError> {
    let identity = identity(user)?;
    let quantity = parse_quantity(quantity)?;
    let mut store = open_store()?;

    if let Some(ack) = store.add_to_saved(&identity, ItemId::new(item), quantity, false)? {
        tracing::info!("{ack}");
    }
    Ok(())
}

/// Remove an item from the vault.
pub fn remove(item: &str, user: &str) -> Result<(), CliError> {
    let identity = identity(user)?;
    let mut store = open_store()?;

    match store.remove_from_saved(&identity, &ItemId::new(item)) {
        Some(ack) => tracing::info!("{ack}"),
        None => tracing::info!("{item} was not in the vault"),
    }
    Ok(())
}

/// Move a vault item back into the cart.
pub fn move_to_cart(item: &str, user: &str) -> Result<(), CliError> {
    let identity = identity(user)?;
    let mut store = open_store()?;

    match store.move_to_cart(&identity, &ItemId::new(item)) {
        Some(ack) => tracing::info!("{ack}"),
        None => tracing::info!("{item} was not in the vault"),
    }
    Ok(())
}
