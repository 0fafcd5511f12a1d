//! Coupon commands.
//!
//! The CLI hands the payload straight through; whether the code is valid
//! for the cart's contents is the coupon service's call, not ours.

use golden_fig_commerce::CouponRecord;

use super::{CliError, open_store, resolve_identity};

/// Show the applied coupon.
pub fn show(user: Option<&str>) -> Result<(), CliError> {
    let identity = resolve_identity(user)?;
    let store = open_store()?;

    match store.applied_coupon(&identity) {
        Some(coupon) => tracing::info!("Applied coupon for {identity}: {}", coupon.code),
        None => tracing::info!("No coupon applied for {identity}"),
    }
    Ok(())
}

/// Apply a coupon.
pub fn apply(code: &str, data: &str, user: Option<&str>) -> Result<(), CliError> {
    let identity = resolve_identity(user)?;
    let payload: serde_json::Value = serde_json::from_str(data)?;
    let mut store = open_store()?;

    let ack = store.apply_coupon(&identity, CouponRecord::new(code, payload));
    tracing::info!("{ack}");
    Ok(())
}

/// Remove the applied coupon.
pub fn remove(user: Option<&str>) -> Result<(), CliError> {
    let identity = resolve_identity(user)?;
    let mut store = open_store()?;

    match store.remove_coupon(&identity) {
        Some(ack) => tracing::info!("{ack}"),
        None => tracing::info!("No coupon applied for {identity}"),
    }
    Ok(())
}
