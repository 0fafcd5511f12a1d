//! Cart and save-for-later line items.
//!
//! Both collections hold the same shape: at most one [`Line`] per item, each
//! with a positive quantity. The functions here are pure - they take a slice
//! and return the successor `Vec` - so the store facade can own the
//! persistence side effect and the logic stays unit-testable without a
//! storage mock.
//!
//! Insertion order is preserved: new lines append, existing lines are
//! updated in place.

use serde::{Deserialize, Serialize};

use golden_fig_core::{ItemId, Quantity};

/// A single line in a cart or save-for-later collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// The purchasable unit (product or variant id).
    pub item: ItemId,
    /// How many of it. Always at least one.
    pub quantity: Quantity,
}

impl Line {
    /// Create a new line.
    #[must_use]
    pub const fn new(item: ItemId, quantity: Quantity) -> Self {
        Self { item, quantity }
    }
}

/// Find the quantity for `item`, if a line exists.
#[must_use]
pub fn quantity_of(lines: &[Line], item: &ItemId) -> Option<Quantity> {
    lines.iter().find(|l| &l.item == item).map(|l| l.quantity)
}

/// Add `quantity` of `item`: accumulate onto an existing line or append a
/// new one. Never produces a second line for the same item.
#[must_use]
pub fn upsert(lines: &[Line], item: &ItemId, quantity: Quantity) -> Vec<Line> {
    let mut next = lines.to_vec();
    match next.iter_mut().find(|l| &l.item == item) {
        Some(line) => line.quantity = line.quantity.saturating_add(quantity),
        None => next.push(Line::new(item.clone(), quantity)),
    }
    next
}

/// Remove the line for `item`.
///
/// Returns the successor collection and the removed line, if any. Removing
/// an absent item is a no-op, not an error.
#[must_use]
pub fn remove(lines: &[Line], item: &ItemId) -> (Vec<Line>, Option<Line>) {
    let mut next = lines.to_vec();
    match next.iter().position(|l| &l.item == item) {
        Some(idx) => {
            let removed = next.remove(idx);
            (next, Some(removed))
        }
        None => (next, None),
    }
}

/// Set the quantity of the line for `item` to exactly `quantity`.
///
/// No-op if no line exists; callers wanting create-or-update use [`upsert`].
#[must_use]
pub fn set_quantity(lines: &[Line], item: &ItemId, quantity: Quantity) -> (Vec<Line>, bool) {
    let mut next = lines.to_vec();
    match next.iter_mut().find(|l| &l.item == item) {
        Some(line) => {
            line.quantity = quantity;
            (next, true)
        }
        None => (next, false),
    }
}

/// Fold `src` into `dst` additively: quantities for shared items add, other
/// lines are appended in `src` order.
#[must_use]
pub fn merge(dst: &[Line], src: &[Line]) -> Vec<Line> {
    let mut next = dst.to_vec();
    for line in src {
        next = upsert(&next, &line.item, line.quantity);
    }
    next
}
