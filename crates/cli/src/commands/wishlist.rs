//! Wishlist commands.

use golden_fig_core::{CustomerId, Identity, ItemId};

use super::{CliError, open_store};

/// Print the wishlist for a customer.
pub fn list(user: &str) -> Result<(), CliError> {
    let identity = Identity::Customer(CustomerId::parse(user)?);
    let store = open_store()?;
    let wishlist = store.wishlist(&identity);

    if wishlist.is_empty() {
        tracing::info!("Wishlist for {identity} is empty");
        return Ok(());
    }

    tracing::info!("Wishlist for {identity}:");
    for item in wishlist.iter() {
        tracing::info!("  {item}");
    }
    Ok(())
}

/// Toggle an item on the wishlist.
pub fn toggle(item: &str, user: &str) -> Result<(), CliError> {
    let identity = Identity::Customer(CustomerId::parse(user)?);
    let mut store = open_store()?;

    let ack = store.toggle_wishlist(&identity, ItemId::new(item))?;
    tracing::info!("{ack}");
    Ok(())
}
