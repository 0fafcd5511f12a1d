//! Applied-coupon association.
//!
//! One optional coupon record per user, attached to the cart and cleared
//! automatically when the cart is cleared at checkout. The record is opaque
//! to the store: eligibility and totals validation happen in the coupon
//! service before `apply_coupon` is ever called.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A coupon as handed over by the coupon validation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponRecord {
    /// The code the user entered.
    pub code: String,
    /// Whatever the coupon service resolved for it (discount kind, amount,
    /// expiry, ...). Not interpreted here.
    #[serde(default)]
    pub data: Value,
}

impl CouponRecord {
    /// Create a coupon record.
    #[must_use]
    pub fn new(code: impl Into<String>, data: Value) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }
}
