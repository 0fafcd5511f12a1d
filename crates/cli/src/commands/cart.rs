//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! gf-cli cart list
//! gf-cli cart add almond-250g -q 2 -u cust_84h2
//! gf-cli cart set-quantity almond-250g 0 -u cust_84h2
//! gf-cli cart merge -u cust_84h2
//! ```

use golden_fig_core::{CustomerId, ItemId};

use super::{CliError, open_store, parse_quantity, resolve_identity};

/// Print the cart for a user.
pub fn list(user: Option<&str>) -> Result<(), CliError> {
    let identity = resolve_identity(user)?;
    let store = open_store()?;
    let cart = store.cart(&identity);

    if cart.is_empty() {
        tracing::info!("Cart for {identity} is empty");
        return Ok(());
    }

    tracing::info!(
        "Cart for {identity} ({} units):",
        store.cart_item_count(&identity)
    );
    for line in cart.iter() {
        tracing::info!("  {} x{}", line.item, line.quantity);
    }
    if let Some(coupon) = store.applied_coupon(&identity) {
        tracing::info!("  coupon: {}", coupon.code);
    }
    Ok(())
}

/// Add an item to the cart.
pub fn add(item: &str, quantity: u32, user: Option<&str>) -> Result<(), CliError> {
    let identity = resolve_identity(user)?;
    let quantity = parse_quantity(quantity)?;
    let mut store = open_store()?;

    let ack = store.add_to_cart(&identity, ItemId::new(item), quantity);
    tracing::info!("{ack}");
    Ok(())
}

/// Remove an item from the cart.
pub fn remove(item: &str, user: Option<&str>) -> Result<(), CliError> {
    let identity = resolve_identity(user)?;
    let mut store = open_store()?;

    match store.remove_from_cart(&identity, &ItemId::new(item)) {
        Some(ack) => tracing::info!("{ack}"),
        None => tracing::info!("{item} was not in the cart"),
    }
    Ok(())
}

/// Set an item's quantity; zero or below removes it.
pub fn set_quantity(item: &str, quantity: i64, user: Option<&str>) -> Result<(), CliError> {
    let identity = resolve_identity(user)?;
    let mut store = open_store()?;

    match store.update_quantity(&identity, &ItemId::new(item), quantity) {
        Some(ack) => tracing::info!("{ack}"),
        None => tracing::info!("{item} was not in the cart"),
    }
    Ok(())
}

/// Fold the guest cart into a customer cart.
pub fn merge(user: &str) -> Result<(), CliError> {
    let customer = CustomerId::parse(user)?;
    let mut store = open_store()?;

    match store.merge_guest_cart(&customer) {
        Some(ack) => tracing::info!("{ack}"),
        None => tracing::info!("Guest cart is empty, nothing to merge"),
    }
    Ok(())
}

/// Empty the cart.
pub fn clear(user: Option<&str>) -> Result<(), CliError> {
    let identity = resolve_identity(user)?;
    let mut store = open_store()?;

    let ack = store.clear_cart(&identity);
    tracing::info!("{ack}");
    Ok(())
}
