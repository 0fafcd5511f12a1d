//! User-visible acknowledgements.
//!
//! Every mutating store operation that the user should hear about returns an
//! [`Ack`]. The store does not render toasts itself; the UI layer owns
//! presentation and calls [`Ack::message`] (or matches on the variant when it
//! wants custom copy). Operations that turn out to be no-ops return no ack.

use golden_fig_core::{ItemId, NotificationId, Quantity};

/// Acknowledgement of a completed mutation, for display to the user.
///
/// "Vault" is the customer-facing name for the save-for-later collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ack {
    /// Item added to the cart (or its quantity accumulated).
    AddedToCart {
        item: ItemId,
        quantity: Quantity,
    },
    /// Item removed from the cart outright (guest removal).
    RemovedFromCart {
        item: ItemId,
    },
    /// Item removed from the cart and transferred to the vault.
    MovedToVault {
        item: ItemId,
        quantity: Quantity,
    },
    /// Cart line quantity set to a new value.
    QuantityUpdated {
        item: ItemId,
        quantity: Quantity,
    },
    /// Guest cart folded into a customer cart at login.
    GuestCartMerged {
        lines: usize,
    },
    /// Cart emptied (checkout completion).
    CartCleared,
    /// Item saved for later directly.
    SavedForLater {
        item: ItemId,
    },
    /// Item removed from the vault.
    RemovedFromSaved {
        item: ItemId,
    },
    /// Item moved from the vault back into the cart.
    MovedToCart {
        item: ItemId,
        quantity: Quantity,
    },
    /// Item added to the wishlist.
    AddedToWishlist {
        item: ItemId,
    },
    /// Item removed from the wishlist.
    RemovedFromWishlist {
        item: ItemId,
    },
    /// Coupon attached to the cart.
    CouponApplied {
        code: String,
    },
    /// Coupon detached from the cart.
    CouponRemoved,
    /// Notification delivered to the inbox.
    NotificationAdded {
        id: NotificationId,
    },
}

impl Ack {
    /// Default display copy for this acknowledgement.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::AddedToCart { item, .. } => format!("{item} added to your cart"),
            Self::RemovedFromCart { item } => format!("{item} removed from your cart"),
            Self::MovedToVault { item, .. } => format!("{item} moved to your vault"),
            Self::QuantityUpdated { item, quantity } => {
                format!("{item} quantity updated to {quantity}")
            }
            Self::GuestCartMerged { lines } => match lines {
                1 => "1 item from your guest cart was kept".to_owned(),
                n => format!("{n} items from your guest cart were kept"),
            },
            Self::CartCleared => "Your cart is empty".to_owned(),
            Self::SavedForLater { item } => format!("{item} saved for later"),
            Self::RemovedFromSaved { item } => format!("{item} removed from your vault"),
            Self::MovedToCart { item, .. } => format!("{item} moved to your cart"),
            Self::AddedToWishlist { item } => format!("{item} added to your wishlist"),
            Self::RemovedFromWishlist { item } => {
                format!("{item} removed from your wishlist")
            }
            Self::CouponApplied { code } => format!("Coupon {code} applied"),
            Self::CouponRemoved => "Coupon removed".to_owned(),
            Self::NotificationAdded { .. } => "You have a new notification".to_owned(),
        }
    }
}

impl std::fmt::Display for Ack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vault_and_plain_removal_are_distinguishable() {
        let moved = Ack::MovedToVault {
            item: ItemId::new("fig-200g"),
            quantity: Quantity::ONE,
        };
        let removed = Ack::RemovedFromCart {
            item: ItemId::new("fig-200g"),
        };
        assert_ne!(moved.message(), removed.message());
        assert!(moved.message().contains("vault"));
    }

    #[test]
    fn test_merge_message_pluralizes() {
        assert!(Ack::GuestCartMerged { lines: 1 }.message().starts_with("1 item "));
        assert!(Ack::GuestCartMerged { lines: 3 }.message().starts_with("3 items"));
    }
}
