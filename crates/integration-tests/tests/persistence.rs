//! Persistence behavior across store restarts.
//!
//! These tests reopen the store over the same directory to check that every
//! mutation reached the disk before the operation returned, and that
//! composed operations land atomically in a single state file.

use golden_fig_commerce::{CouponRecord, NotificationDraft};
use golden_fig_core::Identity;
use golden_fig_integration_tests::{TestStore, customer, item, qty};
use serde_json::json;

#[test]
fn reopened_store_sees_identical_collections() {
    let ctx = TestStore::new();
    let u = customer("u1");
    {
        let mut store = ctx.open();
        store.add_to_cart(&u, item("A"), qty(2));
        store.add_to_cart(&u, item("B"), qty(1));
        store.remove_from_cart(&u, &item("B"));
        store.toggle_wishlist(&u, item("W")).expect("toggle");
        store.add_notification(&u, NotificationDraft::new("Order shipped", "On its way"));
        store.apply_coupon(&u, CouponRecord::new("HARVEST10", json!({"percent_off": 10})));
    }

    let store = ctx.open();
    assert_eq!(store.cart(&u).first().expect("cart line").item, item("A"));
    assert_eq!(store.saved(&u).first().expect("vault line").item, item("B"));
    assert_eq!(store.wishlist(&u).to_vec(), vec![item("W")]);
    assert_eq!(
        store.notifications(&u).first().expect("entry").title,
        "Order shipped"
    );
    assert_eq!(
        store.applied_coupon(&u).expect("coupon").code,
        "HARVEST10"
    );
}

#[test]
fn merge_lands_both_sides_in_one_durable_write() {
    let ctx = TestStore::new();
    let u1 = customer("u1");
    let Identity::Customer(ref u1_id) = u1 else {
        unreachable!()
    };
    {
        let mut store = ctx.open();
        store.add_to_cart(&Identity::Guest, item("A"), qty(2));
        store.add_to_cart(&u1, item("A"), qty(1));
        store.merge_guest_cart(u1_id);
    }

    // A reader of the persisted state sees the merge completed: quantities
    // added and the guest cart gone, never an in-between
    let store = ctx.open();
    assert_eq!(store.cart(&u1).first().expect("line").quantity, qty(3));
    assert!(store.cart(&Identity::Guest).is_empty());
}

#[test]
fn move_to_cart_is_atomic_across_restart() {
    let ctx = TestStore::new();
    let u = customer("u1");
    {
        let mut store = ctx.open();
        store.add_to_cart(&u, item("P1"), qty(3));
        store.remove_from_cart(&u, &item("P1"));
        store.move_to_cart(&u, &item("P1"));
    }

    let store = ctx.open();
    let total: u32 = store.cart(&u).iter().map(|l| l.quantity.get()).sum::<u32>()
        + store.saved(&u).iter().map(|l| l.quantity.get()).sum::<u32>();
    assert_eq!(total, 3, "the item exists in exactly one collection");
    assert_eq!(store.cart(&u).len(), 1);
    assert!(store.saved(&u).is_empty());
}

#[test]
fn snapshots_survive_later_mutations() {
    let ctx = TestStore::new();
    let mut store = ctx.open();
    let u = customer("u1");
    store.add_to_cart(&u, item("A"), qty(1));

    let before = store.cart(&u);
    store.add_to_cart(&u, item("B"), qty(1));
    store.clear_cart(&u);

    // The old snapshot still reads what it read then
    assert_eq!(before.len(), 1);
    assert_eq!(before.first().expect("line").item, item("A"));
    assert!(store.cart(&u).is_empty());
}

#[test]
fn state_file_is_written_without_leftover_temp_files() {
    let ctx = TestStore::new();
    let mut store = ctx.open();
    store.add_to_cart(&Identity::Guest, item("A"), qty(1));

    assert!(ctx.state_file().exists());
    let entries: Vec<_> = std::fs::read_dir(ctx.state_file().parent().expect("parent"))
        .expect("read dir")
        .map(|e| e.expect("entry").file_name().into_string().expect("name"))
        .collect();
    assert_eq!(entries, vec!["commerce_state.json".to_owned()]);
}

#[test]
fn mark_all_read_persists() {
    let ctx = TestStore::new();
    let u = customer("u1");
    {
        let mut store = ctx.open();
        store.add_notification(&u, NotificationDraft::new("a", ""));
        store.add_notification(&u, NotificationDraft::new("b", ""));
        store.mark_all_read(&u);
    }

    let store = ctx.open();
    assert_eq!(store.unread_count(&u), 0);
    assert_eq!(store.notifications(&u).len(), 2);
}
