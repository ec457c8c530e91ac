//! Black-box tests for the storefront facade: everything goes through the
//! public contract, with time injected so timer behavior is deterministic.

use chrono::{DateTime, Duration, TimeZone, Utc};

use techstore_catalog::{Catalog, Category, FilterCriteria, Product, ProductId, SortBy};
use techstore_cart::CartEvent;
use techstore_core::{DomainError, EntityId};
use techstore_events::Event;
use techstore_notifications::Severity;
use techstore_storefront::{Storefront, default_toast_duration};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 29, 12, 0, 0).unwrap()
}

fn product(name: &str, category: &str, price: u64, stock: u32) -> Product {
    Product {
        id: ProductId::new(EntityId::new()),
        name: name.to_string(),
        description: format!("{name} description"),
        price,
        original_price: None,
        category: Category::from(category),
        images: vec![format!("https://img.example/{name}.jpg")],
        stock,
        max_stock: 20,
        rating: 40,
        reviews: 10,
        badge: None,
    }
}

/// Catalog with product A ($20.00, out of stock) and B ($15.00, stock 4),
/// plus an appliance for category filtering.
fn seeded_store() -> (Storefront, ProductId, ProductId) {
    let a = product("Gaming Keyboard", "Electronics", 2_000, 0);
    let b = product("Wireless Mouse", "Electronics", 1_500, 4);
    let a_id = a.id;
    let b_id = b.id;
    let catalog = Catalog::new(vec![a, b, product("Toaster", "Appliances", 4_500, 7)]);

    let store = Storefront::new(catalog, t0() + Duration::days(7), t0());
    (store, a_id, b_id)
}

#[test]
fn visible_list_starts_not_yet_computed() {
    let (store, _, _) = seeded_store();

    // Not-yet-computed is distinct from computed-and-empty.
    assert!(store.filtered().is_none());
}

#[test]
fn default_criteria_show_the_whole_catalog_sorted_by_name() {
    let (mut store, _, _) = seeded_store();

    store.set_filter_criteria(FilterCriteria::default());

    let view = store.filtered().expect("criteria were set");
    let names: Vec<&str> = view.products().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Gaming Keyboard", "Toaster", "Wireless Mouse"]);
    assert_eq!(view.summary(), "Showing 3 of 3 products");
}

#[test]
fn in_stock_cheapest_first_hides_the_out_of_stock_product() {
    let (mut store, _, b_id) = seeded_store();

    store.set_filter_criteria(FilterCriteria {
        in_stock_only: true,
        sort_by: SortBy::PriceLowHigh,
        category: Some(Category::from("Electronics")),
        ..FilterCriteria::default()
    });

    let view = store.filtered().expect("criteria were set");
    let ids: Vec<ProductId> = view.products().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![b_id]);
}

#[test]
fn a_filter_with_no_matches_is_a_valid_empty_view() {
    let (mut store, _, _) = seeded_store();

    store.set_filter_criteria(FilterCriteria {
        max_price: 1,
        ..FilterCriteria::default()
    });

    let view = store.filtered().expect("criteria were set");
    assert!(view.is_empty());
    assert_eq!(view.summary(), "Showing 0 of 3 products");
}

#[test]
fn adding_to_cart_updates_totals_and_raises_a_success_toast() {
    let (mut store, _, b_id) = seeded_store();

    store.add_to_cart(b_id, t0()).unwrap();

    let cart = store.cart();
    assert_eq!(cart.total_items, 1);
    assert_eq!(cart.total_price, 1_500);

    let toasts = store.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "Wireless Mouse added to cart!");
    assert_eq!(toasts[0].severity, Severity::Success);
    assert_eq!(toasts[0].expires_at, Some(t0() + default_toast_duration()));
}

#[test]
fn adding_an_unknown_product_is_not_found() {
    let (mut store, _, _) = seeded_store();

    let err = store
        .add_to_cart(ProductId::new(EntityId::new()), t0())
        .unwrap_err();
    assert_eq!(err, DomainError::NotFound);
    assert!(store.cart().entries.is_empty());
    assert!(store.toasts().is_empty());
}

#[test]
fn adding_the_same_product_twice_keeps_one_entry() {
    let (mut store, _, b_id) = seeded_store();

    store.add_to_cart(b_id, t0()).unwrap();
    store.add_to_cart(b_id, t0()).unwrap();

    let cart = store.cart();
    assert_eq!(cart.entries.len(), 1);
    assert_eq!(cart.entries[0].quantity, 2);
    assert_eq!(cart.total_items, 2);
    assert_eq!(cart.total_price, 3_000);
}

#[test]
fn update_quantity_to_zero_removes_the_entry() {
    let (mut store, _, b_id) = seeded_store();

    store.add_to_cart(b_id, t0()).unwrap();
    store.update_cart_quantity(b_id, 0, t0()).unwrap();

    let cart = store.cart();
    assert!(cart.entries.is_empty());
    assert_eq!(cart.total_items, 0);
}

#[test]
fn removing_an_entry_raises_an_info_toast() {
    let (mut store, _, b_id) = seeded_store();

    store.add_to_cart(b_id, t0()).unwrap();
    store.remove_from_cart(b_id, t0()).unwrap();

    let toasts = store.toasts();
    assert_eq!(toasts.len(), 2);
    assert_eq!(toasts[1].message, "Wireless Mouse removed from cart");
    assert_eq!(toasts[1].severity, Severity::Info);
}

#[test]
fn removing_an_absent_entry_is_a_silent_no_op() {
    let (mut store, a_id, _) = seeded_store();

    store.remove_from_cart(a_id, t0()).unwrap();

    assert!(store.cart().entries.is_empty());
    assert!(store.toasts().is_empty());
}

#[test]
fn clearing_the_cart_empties_it_and_raises_one_toast() {
    let (mut store, _, b_id) = seeded_store();

    store.add_to_cart(b_id, t0()).unwrap();
    store.clear_cart(t0()).unwrap();

    assert!(store.cart().entries.is_empty());

    let toasts = store.toasts();
    assert_eq!(toasts.len(), 2);
    assert_eq!(toasts[1].message, "Cart cleared");
}

#[test]
fn cart_toasts_expire_after_their_duration() {
    let (mut store, _, b_id) = seeded_store();

    store.add_to_cart(b_id, t0()).unwrap();
    assert_eq!(store.toasts().len(), 1);

    store.tick(t0() + default_toast_duration() - Duration::milliseconds(1));
    assert_eq!(store.toasts().len(), 1);

    store.tick(t0() + default_toast_duration());
    assert!(store.toasts().is_empty());
}

#[test]
fn dismissal_beats_expiry_and_the_timer_stays_dead() {
    let (mut store, _, b_id) = seeded_store();

    store.add_to_cart(b_id, t0()).unwrap();
    let toast_id = store.toasts()[0].id;

    assert!(store.dismiss_toast(toast_id));
    assert!(!store.dismiss_toast(toast_id));

    // The expiry that would have fired later finds nothing to remove.
    store.tick(t0() + Duration::seconds(10));
    assert!(store.toasts().is_empty());
}

#[test]
fn subscribers_observe_cart_events_in_mutation_order() {
    let (mut store, _, b_id) = seeded_store();
    let subscription = store.subscribe();

    store.add_to_cart(b_id, t0()).unwrap();
    store.update_cart_quantity(b_id, 3, t0()).unwrap();
    store.remove_from_cart(b_id, t0()).unwrap();

    let kinds: Vec<&str> = subscription
        .drain()
        .iter()
        .map(|e| e.event_type())
        .collect();
    assert_eq!(
        kinds,
        vec!["cart.item.added", "cart.item.quantity_updated", "cart.item.removed"]
    );
}

#[test]
fn quantity_updates_do_not_raise_toasts() {
    let (mut store, _, b_id) = seeded_store();

    store.add_to_cart(b_id, t0()).unwrap();
    store.update_cart_quantity(b_id, 3, t0()).unwrap();

    assert_eq!(store.toasts().len(), 1); // only the add toast
    assert_eq!(store.cart().total_items, 3);
}

#[test]
fn countdown_ticks_toward_the_sale_end_and_cancels_on_teardown() {
    let (mut store, _, _) = seeded_store();
    assert_eq!(store.countdown().remaining().days, 7);

    store.tick(t0() + Duration::seconds(1));
    let remaining = store.countdown().remaining();
    assert_eq!(remaining.days, 6);
    assert_eq!(remaining.hours, 23);
    assert_eq!(remaining.seconds, 59);

    store.cancel_countdown();
    store.tick(t0() + Duration::seconds(30));
    assert_eq!(store.countdown().remaining(), remaining);
}

#[test]
fn external_events_match_their_cart_payloads() {
    let (mut store, _, b_id) = seeded_store();
    let subscription = store.subscribe();

    store.add_to_cart(b_id, t0()).unwrap();

    match subscription.drain().as_slice() {
        [CartEvent::ItemAdded(e)] => {
            assert_eq!(e.product_id, b_id);
            assert_eq!(e.name, "Wireless Mouse");
            assert_eq!(e.unit_price, 1_500);
            assert_eq!(e.occurred_at, t0());
        }
        other => panic!("Expected a single ItemAdded event, got {other:?}"),
    }
}
