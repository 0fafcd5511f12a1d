//! Wishlist entries.
//!
//! Per-user set of item ids with insertion order preserved for display.
//! The toggle here is the store's only toggle-shaped operation; everything
//! else is directional.

use golden_fig_core::ItemId;

/// Outcome of a wishlist toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The item was not present and has been added.
    Added,
    /// The item was present and has been removed.
    Removed,
}

/// Whether `item` is on the wishlist.
#[must_use]
pub fn contains(entries: &[ItemId], item: &ItemId) -> bool {
    entries.contains(item)
}

/// Toggle membership of `item`: remove it if present, append it otherwise.
#[must_use]
pub fn toggle(entries: &[ItemId], item: &ItemId) -> (Vec<ItemId>, Toggle) {
    let mut next = entries.to_vec();
    match next.iter().position(|e| e == item) {
        Some(idx) => {
            next.remove(idx);
            (next, Toggle::Removed)
        }
        None => {
            next.push(item.clone());
            (next, Toggle::Added)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> ItemId {
        ItemId::new(id)
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let (entries, outcome) = toggle(&[], &item("pistachio-250g"));
        assert_eq!(outcome, Toggle::Added);
        assert!(contains(&entries, &item("pistachio-250g")));

        let (entries, outcome) = toggle(&entries, &item("pistachio-250g"));
        assert_eq!(outcome, Toggle::Removed);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let start = vec![item("a"), item("b")];
        let (once, _) = toggle(&start, &item("c"));
        let (twice, _) = toggle(&once, &item("c"));
        assert_eq!(twice, start);
    }

    #[test]
    fn test_toggle_preserves_order_of_other_entries() {
        let start = vec![item("a"), item("b"), item("c")];
        let (next, outcome) = toggle(&start, &item("b"));
        assert_eq!(outcome, Toggle::Removed);
        assert_eq!(next, vec![item("a"), item("c")]);
    }
}
