//! The commerce store facade.
//!
//! [`CommerceStore`] is the only mutation surface for per-user commerce
//! state. Every operation runs to completion on the calling thread and
//! serializes the full state to the storage backend before returning, so a
//! caller never observes a mutation that is not at least queued for
//! durability. Operations that touch two collections (vault transfer on
//! removal, move-to-cart, the guest-cart merge) update both in memory and
//! then persist once - that single write is what makes them atomic.
//!
//! Collections are copy-on-write: each user's list is an `Arc<[T]>` replaced
//! wholesale on mutation. A snapshot handed to a caller before a mutation
//! still reads the old list afterwards - stale, never corrupt.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use golden_fig_core::{CustomerId, GUEST_KEY, Identity, ItemId, Quantity};

use crate::ack::Ack;
use crate::coupon::CouponRecord;
use crate::error::{Result, StoreError};
use crate::line::{self, Line};
use crate::notifications::{self, Notification, NotificationDraft};
use crate::storage::{StorageBackend, StorageError};
use crate::wishlist::{self, Toggle};

/// Version tag written into every persisted blob.
const STATE_FORMAT_VERSION: u32 = 1;

/// Serialized shape of the full store state.
///
/// Kept separate from the in-memory [`Collections`] so the wire format does
/// not leak `Arc` details and can carry a version field.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedState {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    carts: HashMap<String, Vec<Line>>,
    #[serde(default)]
    saved: HashMap<String, Vec<Line>>,
    #[serde(default)]
    wishlists: HashMap<String, Vec<ItemId>>,
    #[serde(default)]
    inboxes: HashMap<String, Vec<Notification>>,
    #[serde(default)]
    coupons: HashMap<String, CouponRecord>,
}

/// In-memory collection state, keyed by [`Identity::state_key`].
///
/// Absence of a key is equivalent to an empty list; keys whose list becomes
/// empty are removed rather than kept around.
#[derive(Debug, Default)]
struct Collections {
    carts: HashMap<String, Arc<[Line]>>,
    saved: HashMap<String, Arc<[Line]>>,
    wishlists: HashMap<String, Arc<[ItemId]>>,
    inboxes: HashMap<String, Arc<[Notification]>>,
    coupons: HashMap<String, CouponRecord>,
}

impl From<PersistedState> for Collections {
    fn from(p: PersistedState) -> Self {
        Self {
            carts: into_shared(p.carts),
            saved: into_shared(p.saved),
            wishlists: into_shared(p.wishlists),
            inboxes: into_shared(p.inboxes),
            coupons: p.coupons,
        }
    }
}

impl From<&Collections> for PersistedState {
    fn from(c: &Collections) -> Self {
        Self {
            version: STATE_FORMAT_VERSION,
            carts: into_owned(&c.carts),
            saved: into_owned(&c.saved),
            wishlists: into_owned(&c.wishlists),
            inboxes: into_owned(&c.inboxes),
            coupons: c.coupons.clone(),
        }
    }
}

fn into_shared<T>(map: HashMap<String, Vec<T>>) -> HashMap<String, Arc<[T]>> {
    map.into_iter().map(|(k, v)| (k, Arc::from(v))).collect()
}

fn into_owned<T: Clone>(map: &HashMap<String, Arc<[T]>>) -> HashMap<String, Vec<T>> {
    map.iter().map(|(k, v)| (k.clone(), v.to_vec())).collect()
}

/// Read a user's list, empty when the key is absent.
fn snapshot<T>(map: &HashMap<String, Arc<[T]>>, key: &str) -> Arc<[T]> {
    map.get(key)
        .cloned()
        .unwrap_or_else(|| Arc::from(Vec::new()))
}

/// Replace a user's list wholesale (copy-on-write step). Empty lists drop
/// the key.
fn replace<T>(map: &mut HashMap<String, Arc<[T]>>, key: &str, next: Vec<T>) {
    if next.is_empty() {
        map.remove(key);
    } else {
        map.insert(key.to_owned(), Arc::from(next));
    }
}

/// Per-user commerce state store.
///
/// Owns cart lines, save-for-later lines ("the vault"), wishlist entries,
/// the notification inbox, and the applied-coupon association for every
/// user, including the guest pseudo-identity.
#[derive(Debug)]
pub struct CommerceStore<B: StorageBackend> {
    backend: B,
    state_key: String,
    collections: Collections,
}

impl<B: StorageBackend> CommerceStore<B> {
    /// Open a store over `backend`, loading any state persisted under
    /// `state_key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the backend read fails, the blob
    /// does not parse, or it carries an unknown format version.
    pub fn open(backend: B, state_key: impl Into<String>) -> Result<Self> {
        let state_key = state_key.into();
        let collections = match backend.load(&state_key)? {
            Some(blob) => {
                let persisted: PersistedState =
                    serde_json::from_slice(&blob).map_err(StorageError::from)?;
                if persisted.version != STATE_FORMAT_VERSION {
                    return Err(StorageError::UnsupportedVersion {
                        found: persisted.version,
                    }
                    .into());
                }
                Collections::from(persisted)
            }
            None => Collections::default(),
        };
        tracing::debug!(key = %state_key, "commerce state loaded");
        Ok(Self {
            backend,
            state_key,
            collections,
        })
    }

    /// Serialize the full state and hand it to the backend.
    ///
    /// The in-memory mutation has already happened by the time this runs; a
    /// write failure is logged and the calling flow continues (the next
    /// successful mutation re-persists everything anyway).
    fn persist(&self) {
        let state = PersistedState::from(&self.collections);
        let blob = match serde_json::to_vec(&state) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!("failed to serialize commerce state: {e}");
                return;
            }
        };
        if let Err(e) = self.backend.save(&self.state_key, &blob) {
            tracing::warn!("failed to persist commerce state: {e}");
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// The user's cart lines.
    #[must_use]
    pub fn cart(&self, identity: &Identity) -> Arc<[Line]> {
        snapshot(&self.collections.carts, identity.state_key())
    }

    /// Total units across the user's cart (for the count badge).
    #[must_use]
    pub fn cart_item_count(&self, identity: &Identity) -> u32 {
        self.cart(identity)
            .iter()
            .fold(0, |acc, l| acc.saturating_add(l.quantity.get()))
    }

    /// Add `quantity` of `item` to the cart, accumulating onto an existing
    /// line.
    ///
    /// Works for guests too - [`Identity::Guest`] keys the guest cart, so a
    /// caller with no signed-in customer still succeeds. Whether adding
    /// *should* have been attempted (stock limits) is the caller's concern;
    /// no upper bound is enforced here.
    #[instrument(skip(self))]
    pub fn add_to_cart(&mut self, identity: &Identity, item: ItemId, quantity: Quantity) -> Ack {
        let key = identity.state_key().to_owned();
        let next = line::upsert(&self.cart(identity), &item, quantity);
        replace(&mut self.collections.carts, &key, next);
        self.persist();
        Ack::AddedToCart { item, quantity }
    }

    /// Remove the cart line for `item`.
    ///
    /// For a signed-in customer the removed line is transferred to the vault
    /// with its quantity preserved - "remove" is semantically "move to
    /// saved". For guests it is a plain deletion: guest saved-items have no
    /// durable meaning across sessions. Removing an absent item is a silent
    /// no-op.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&mut self, identity: &Identity, item: &ItemId) -> Option<Ack> {
        let key = identity.state_key().to_owned();
        let (next, removed) = line::remove(&self.cart(identity), item);
        let removed = removed?;
        replace(&mut self.collections.carts, &key, next);

        let ack = if identity.is_guest() {
            Ack::RemovedFromCart { item: item.clone() }
        } else {
            let vault = line::upsert(&self.saved(identity), item, removed.quantity);
            replace(&mut self.collections.saved, &key, vault);
            Ack::MovedToVault {
                item: item.clone(),
                quantity: removed.quantity,
            }
        };
        self.persist();
        Some(ack)
    }

    /// Set the cart line for `item` to exactly `quantity`.
    ///
    /// A quantity below one is the removal path, vault transfer included;
    /// updating an absent line is a silent no-op.
    #[instrument(skip(self))]
    pub fn update_quantity(
        &mut self,
        identity: &Identity,
        item: &ItemId,
        quantity: i64,
    ) -> Option<Ack> {
        let Ok(quantity) = Quantity::try_from(quantity) else {
            return self.remove_from_cart(identity, item);
        };
        let key = identity.state_key().to_owned();
        let (next, changed) = line::set_quantity(&self.cart(identity), item, quantity);
        if !changed {
            return None;
        }
        replace(&mut self.collections.carts, &key, next);
        self.persist();
        Some(Ack::QuantityUpdated {
            item: item.clone(),
            quantity,
        })
    }

    /// Fold the guest cart into `customer`'s cart at login.
    ///
    /// Quantities for shared items add; the guest cart is cleared in the
    /// same update, and both changes land in one durable write. No-op when
    /// the guest cart is empty. Saved and wishlist state are untouched.
    #[instrument(skip(self))]
    pub fn merge_guest_cart(&mut self, customer: &CustomerId) -> Option<Ack> {
        let guest = snapshot(&self.collections.carts, GUEST_KEY);
        if guest.is_empty() {
            return None;
        }
        let merged = line::merge(
            &snapshot(&self.collections.carts, customer.as_str()),
            &guest,
        );
        replace(&mut self.collections.carts, customer.as_str(), merged);
        self.collections.carts.remove(GUEST_KEY);
        self.persist();
        Some(Ack::GuestCartMerged { lines: guest.len() })
    }

    /// Empty the user's cart and drop any applied coupon.
    ///
    /// Called after checkout completion.
    #[instrument(skip(self))]
    pub fn clear_cart(&mut self, identity: &Identity) -> Ack {
        let key = identity.state_key();
        self.collections.carts.remove(key);
        self.collections.coupons.remove(key);
        self.persist();
        Ack::CartCleared
    }

    // =========================================================================
    // Save-for-later ("the vault")
    // =========================================================================

    /// The user's saved-for-later lines.
    #[must_use]
    pub fn saved(&self, identity: &Identity) -> Arc<[Line]> {
        snapshot(&self.collections.saved, identity.state_key())
    }

    /// Save `quantity` of `item` for later, accumulating onto an existing
    /// line.
    ///
    /// Unlike the cart there is no guest fallback: the vault is a durable
    /// per-account collection, so guests are refused with no state change.
    /// `silent` suppresses the acknowledgement when this is invoked as a
    /// side effect rather than a direct user action.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdentityRequired`] for [`Identity::Guest`].
    #[instrument(skip(self))]
    pub fn add_to_saved(
        &mut self,
        identity: &Identity,
        item: ItemId,
        quantity: Quantity,
        silent: bool,
    ) -> Result<Option<Ack>> {
        let Some(customer) = identity.customer() else {
            return Err(StoreError::IdentityRequired("save-for-later"));
        };
        let key = customer.as_str().to_owned();
        let next = line::upsert(&snapshot(&self.collections.saved, &key), &item, quantity);
        replace(&mut self.collections.saved, &key, next);
        self.persist();
        Ok((!silent).then(|| Ack::SavedForLater { item }))
    }

    /// Remove the saved line for `item`; silent no-op when absent.
    #[instrument(skip(self))]
    pub fn remove_from_saved(&mut self, identity: &Identity, item: &ItemId) -> Option<Ack> {
        let key = identity.state_key().to_owned();
        let (next, removed) = line::remove(&self.saved(identity), item);
        removed?;
        replace(&mut self.collections.saved, &key, next);
        self.persist();
        Some(Ack::RemovedFromSaved { item: item.clone() })
    }

    /// Move the saved line for `item` back into the cart, quantity
    /// preserved.
    ///
    /// Both collections are updated in memory and persisted in one write,
    /// so no external read ever sees the item in neither or both. No-op if
    /// nothing is saved under `item` (which also covers guests, whose vault
    /// is always empty).
    #[instrument(skip(self))]
    pub fn move_to_cart(&mut self, identity: &Identity, item: &ItemId) -> Option<Ack> {
        let key = identity.state_key().to_owned();
        let (vault, moved) = line::remove(&self.saved(identity), item);
        let moved = moved?;
        let cart = line::upsert(&self.cart(identity), item, moved.quantity);
        replace(&mut self.collections.saved, &key, vault);
        replace(&mut self.collections.carts, &key, cart);
        self.persist();
        Some(Ack::MovedToCart {
            item: item.clone(),
            quantity: moved.quantity,
        })
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// The user's wishlist, in insertion order.
    #[must_use]
    pub fn wishlist(&self, identity: &Identity) -> Arc<[ItemId]> {
        snapshot(&self.collections.wishlists, identity.state_key())
    }

    /// Toggle `item` on the wishlist: add when absent, remove when present.
    ///
    /// The acknowledgement distinguishes the two directions. Like the
    /// vault, the wishlist is per-account only.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdentityRequired`] for [`Identity::Guest`].
    #[instrument(skip(self))]
    pub fn toggle_wishlist(&mut self, identity: &Identity, item: ItemId) -> Result<Ack> {
        let Some(customer) = identity.customer() else {
            return Err(StoreError::IdentityRequired("wishlist"));
        };
        let key = customer.as_str().to_owned();
        let (next, outcome) =
            wishlist::toggle(&snapshot(&self.collections.wishlists, &key), &item);
        replace(&mut self.collections.wishlists, &key, next);
        self.persist();
        Ok(match outcome {
            Toggle::Added => Ack::AddedToWishlist { item },
            Toggle::Removed => Ack::RemovedFromWishlist { item },
        })
    }

    // =========================================================================
    // Notification inbox
    // =========================================================================

    /// The user's notifications, newest first.
    #[must_use]
    pub fn notifications(&self, identity: &Identity) -> Arc<[Notification]> {
        snapshot(&self.collections.inboxes, identity.state_key())
    }

    /// Count of unread notifications (for the inbox badge).
    #[must_use]
    pub fn unread_count(&self, identity: &Identity) -> usize {
        notifications::unread_count(&self.notifications(identity))
    }

    /// Deliver a notification to the user's inbox.
    ///
    /// Fills defaults (generated id, `created_at` now, unread), prepends,
    /// and truncates to the inbox cap. Guest is accepted like any other
    /// key - routing background notifications to guests is the caller's
    /// choice, not special-cased here.
    #[instrument(skip(self, draft))]
    pub fn add_notification(&mut self, identity: &Identity, draft: NotificationDraft) -> Ack {
        let key = identity.state_key().to_owned();
        let entry = draft.into_notification();
        let id = entry.id;
        let next = notifications::push(&self.notifications(identity), entry);
        replace(&mut self.collections.inboxes, &key, next);
        self.persist();
        Ack::NotificationAdded { id }
    }

    /// Mark every notification read; no-op (and no durable write) when the
    /// inbox is empty.
    #[instrument(skip(self))]
    pub fn mark_all_read(&mut self, identity: &Identity) {
        let inbox = self.notifications(identity);
        if inbox.is_empty() {
            return;
        }
        let key = identity.state_key().to_owned();
        let next = notifications::mark_all_read(&inbox);
        replace(&mut self.collections.inboxes, &key, next);
        self.persist();
    }

    /// Empty the user's inbox.
    #[instrument(skip(self))]
    pub fn clear_notifications(&mut self, identity: &Identity) {
        if self
            .collections
            .inboxes
            .remove(identity.state_key())
            .is_some()
        {
            self.persist();
        }
    }

    // =========================================================================
    // Coupon association
    // =========================================================================

    /// The coupon currently applied to the user's cart, if any.
    #[must_use]
    pub fn applied_coupon(&self, identity: &Identity) -> Option<&CouponRecord> {
        self.collections.coupons.get(identity.state_key())
    }

    /// Attach a coupon record to the user's cart, replacing any previous
    /// one. The record is stored as given; eligibility was the coupon
    /// service's problem.
    #[instrument(skip(self, coupon))]
    pub fn apply_coupon(&mut self, identity: &Identity, coupon: CouponRecord) -> Ack {
        let code = coupon.code.clone();
        self.collections
            .coupons
            .insert(identity.state_key().to_owned(), coupon);
        self.persist();
        Ack::CouponApplied { code }
    }

    /// Detach the applied coupon; silent no-op when none is applied.
    #[instrument(skip(self))]
    pub fn remove_coupon(&mut self, identity: &Identity) -> Option<Ack> {
        self.collections.coupons.remove(identity.state_key())?;
        self.persist();
        Some(Ack::CouponRemoved)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    fn store() -> CommerceStore<MemoryBackend> {
        CommerceStore::open(MemoryBackend::new(), "commerce_state").unwrap()
    }

    fn customer(id: &str) -> Identity {
        Identity::Customer(CustomerId::parse(id).unwrap())
    }

    fn item(id: &str) -> ItemId {
        ItemId::new(id)
    }

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    #[test]
    fn test_guest_add_to_cart_succeeds() {
        let mut store = store();
        let ack = store.add_to_cart(&Identity::Guest, item("almond-250g"), qty(1));
        assert_eq!(
            ack,
            Ack::AddedToCart {
                item: item("almond-250g"),
                quantity: qty(1)
            }
        );
        assert_eq!(store.cart(&Identity::Guest).len(), 1);
    }

    #[test]
    fn test_add_accumulates_into_single_line() {
        let mut store = store();
        let u = customer("u1");
        store.add_to_cart(&u, item("P"), qty(2));
        store.add_to_cart(&u, item("P"), qty(3));

        let cart = store.cart(&u);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.first().unwrap().quantity, qty(5));
    }

    #[test]
    fn test_customer_remove_moves_to_vault_conserving_quantity() {
        let mut store = store();
        let u = customer("u1");
        store.add_to_cart(&u, item("X"), qty(4));

        let ack = store.remove_from_cart(&u, &item("X")).unwrap();
        assert_eq!(
            ack,
            Ack::MovedToVault {
                item: item("X"),
                quantity: qty(4)
            }
        );
        assert!(store.cart(&u).is_empty());
        assert_eq!(store.saved(&u).first().unwrap().quantity, qty(4));
    }

    #[test]
    fn test_guest_remove_is_pure_deletion() {
        let mut store = store();
        store.add_to_cart(&Identity::Guest, item("X"), qty(2));

        let ack = store.remove_from_cart(&Identity::Guest, &item("X")).unwrap();
        assert_eq!(ack, Ack::RemovedFromCart { item: item("X") });
        assert!(store.cart(&Identity::Guest).is_empty());
        assert!(store.saved(&Identity::Guest).is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = store();
        let u = customer("u1");
        store.add_to_cart(&u, item("X"), qty(1));

        assert!(store.remove_from_cart(&u, &item("X")).is_some());
        // Second removal is a no-op, and the vault does not double up
        assert!(store.remove_from_cart(&u, &item("X")).is_none());
        assert_eq!(store.saved(&u).first().unwrap().quantity, qty(1));
    }

    #[test]
    fn test_update_quantity_floor_behaves_like_removal() {
        for below_floor in [0i64, -5] {
            let mut store = store();
            let u = customer("u1");
            store.add_to_cart(&u, item("X"), qty(4));

            let ack = store.update_quantity(&u, &item("X"), below_floor).unwrap();
            assert_eq!(
                ack,
                Ack::MovedToVault {
                    item: item("X"),
                    quantity: qty(4)
                }
            );
            assert!(store.cart(&u).is_empty());
            assert_eq!(store.saved(&u).first().unwrap().quantity, qty(4));
        }
    }

    #[test]
    fn test_update_quantity_absent_line_is_noop() {
        let mut store = store();
        let u = customer("u1");
        assert!(store.update_quantity(&u, &item("X"), 3).is_none());
        assert!(store.cart(&u).is_empty());
    }

    #[test]
    fn test_merge_guest_cart_is_additive_and_clears_guest() {
        let mut store = store();
        let u1 = CustomerId::parse("u1").unwrap();
        let user = Identity::Customer(u1.clone());

        store.add_to_cart(&Identity::Guest, item("A"), qty(2));
        store.add_to_cart(&user, item("A"), qty(1));
        store.add_to_cart(&user, item("B"), qty(1));

        let ack = store.merge_guest_cart(&u1).unwrap();
        assert_eq!(ack, Ack::GuestCartMerged { lines: 1 });

        let cart = store.cart(&user);
        assert_eq!(line::quantity_of(&cart, &item("A")), Some(qty(3)));
        assert_eq!(line::quantity_of(&cart, &item("B")), Some(qty(1)));
        assert!(store.cart(&Identity::Guest).is_empty());
        assert!(store.saved(&user).is_empty());
    }

    #[test]
    fn test_merge_empty_guest_cart_is_noop() {
        let mut store = store();
        let u1 = CustomerId::parse("u1").unwrap();
        assert!(store.merge_guest_cart(&u1).is_none());
    }

    #[test]
    fn test_clear_cart_drops_coupon() {
        let mut store = store();
        let u = customer("u1");
        store.add_to_cart(&u, item("A"), qty(1));
        store.apply_coupon(&u, CouponRecord::new("HARVEST10", serde_json::Value::Null));

        store.clear_cart(&u);
        assert!(store.cart(&u).is_empty());
        assert!(store.applied_coupon(&u).is_none());
    }

    #[test]
    fn test_add_to_saved_refuses_guest() {
        let mut store = store();
        let err = store
            .add_to_saved(&Identity::Guest, item("X"), qty(1), false)
            .unwrap_err();
        assert!(matches!(err, StoreError::IdentityRequired(_)));
        assert!(store.saved(&Identity::Guest).is_empty());
    }

    #[test]
    fn test_add_to_saved_silent_suppresses_ack() {
        let mut store = store();
        let u = customer("u1");
        let ack = store.add_to_saved(&u, item("X"), qty(1), true).unwrap();
        assert!(ack.is_none());
        assert_eq!(store.saved(&u).len(), 1);
    }

    #[test]
    fn test_toggle_wishlist_refuses_guest() {
        let mut store = store();
        let err = store
            .toggle_wishlist(&Identity::Guest, item("X"))
            .unwrap_err();
        assert!(matches!(err, StoreError::IdentityRequired("wishlist")));
    }

    #[test]
    fn test_toggle_wishlist_is_its_own_inverse() {
        let mut store = store();
        let u = customer("u1");

        let ack = store.toggle_wishlist(&u, item("X")).unwrap();
        assert_eq!(ack, Ack::AddedToWishlist { item: item("X") });
        assert_eq!(store.wishlist(&u).len(), 1);

        let ack = store.toggle_wishlist(&u, item("X")).unwrap();
        assert_eq!(ack, Ack::RemovedFromWishlist { item: item("X") });
        assert!(store.wishlist(&u).is_empty());
    }

    #[test]
    fn test_move_to_cart_roundtrip() {
        let mut store = store();
        let u = customer("u1");
        store.add_to_cart(&u, item("P1"), qty(1));
        store.add_to_cart(&u, item("P1"), qty(2));
        store.remove_from_cart(&u, &item("P1"));

        let ack = store.move_to_cart(&u, &item("P1")).unwrap();
        assert_eq!(
            ack,
            Ack::MovedToCart {
                item: item("P1"),
                quantity: qty(3)
            }
        );
        assert_eq!(store.cart(&u).first().unwrap().quantity, qty(3));
        assert!(store.saved(&u).is_empty());
    }

    #[test]
    fn test_snapshots_are_copy_on_write() {
        let mut store = store();
        let u = customer("u1");
        store.add_to_cart(&u, item("A"), qty(1));

        let before = store.cart(&u);
        store.add_to_cart(&u, item("B"), qty(1));

        assert_eq!(before.len(), 1);
        assert_eq!(store.cart(&u).len(), 2);
    }

    #[test]
    fn test_inbox_cap() {
        let mut store = store();
        let u = customer("u1");
        for i in 0..105 {
            store.add_notification(&u, NotificationDraft::new(format!("n{i}"), ""));
        }
        let inbox = store.notifications(&u);
        assert_eq!(inbox.len(), notifications::INBOX_CAP);
        assert_eq!(inbox.first().unwrap().title, "n104");
    }

    #[test]
    fn test_mark_all_read_and_clear() {
        let mut store = store();
        let u = customer("u1");
        store.add_notification(&u, NotificationDraft::new("a", ""));
        store.add_notification(&u, NotificationDraft::new("b", ""));
        assert_eq!(store.unread_count(&u), 2);

        store.mark_all_read(&u);
        assert_eq!(store.unread_count(&u), 0);
        assert_eq!(store.notifications(&u).len(), 2);

        store.clear_notifications(&u);
        assert!(store.notifications(&u).is_empty());
    }

    #[test]
    fn test_reopen_restores_state() {
        let backend = MemoryBackend::new();
        let u = customer("u1");
        {
            let mut store = CommerceStore::open(&backend, "commerce_state").unwrap();
            store.add_to_cart(&u, item("A"), qty(2));
            store.toggle_wishlist(&u, item("W")).unwrap();
            store.add_notification(&u, NotificationDraft::new("hi", "there"));
        }

        let store = CommerceStore::open(&backend, "commerce_state").unwrap();
        assert_eq!(store.cart(&u).len(), 1);
        assert_eq!(store.wishlist(&u).len(), 1);
        assert_eq!(store.notifications(&u).len(), 1);
    }

    #[test]
    fn test_open_rejects_unknown_format_version() {
        let backend = MemoryBackend::new();
        backend.save("commerce_state", b"{\"version\": 99}").unwrap();

        let err = CommerceStore::open(&backend, "commerce_state").unwrap_err();
        assert!(matches!(
            err,
            StoreError::Storage(StorageError::UnsupportedVersion { found: 99 })
        ));
    }

    /// Backend whose writes always fail; mutations must still land in
    /// memory without panicking (the failure is logged, not raised).
    #[derive(Debug)]
    struct FailingBackend;

    impl StorageBackend for FailingBackend {
        fn save(&self, _key: &str, _blob: &[u8]) -> std::result::Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::other("disk full")))
        }

        fn load(&self, _key: &str) -> std::result::Result<Option<Vec<u8>>, StorageError> {
            Ok(None)
        }
    }

    #[test]
    fn test_persistence_failure_does_not_lose_the_mutation() {
        let mut store = CommerceStore::open(FailingBackend, "commerce_state").unwrap();
        let u = customer("u1");
        store.add_to_cart(&u, item("A"), qty(1));
        assert_eq!(store.cart(&u).len(), 1);
    }
}
