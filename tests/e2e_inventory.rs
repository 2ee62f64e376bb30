// ShelfTrack - tests/e2e_inventory.rs
//
// End-to-end tests for the inventory lifecycle: form input through the
// store, persistence to a real file on disk, reload, filtering, and
// aggregation — no mocks, no stubs. This exercises the full path from
// raw form text to a persisted JSON collection and back.

use shelftrack::app::persist;
use shelftrack::app::store::InventoryStore;
use shelftrack::core::filter;
use shelftrack::core::model::{FilterMode, ProductInput};
use shelftrack::core::stats;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

fn input(name: &str, quantity: &str, price: &str, expiry: &str) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        quantity: quantity.to_string(),
        price: price.to_string(),
        weight: String::new(),
        expiry_date: expiry.to_string(),
        category: "Dairy".to_string(),
    }
}

// =============================================================================
// Lifecycle E2E
// =============================================================================

/// Adding, mutating, and reloading must survive a real disk round-trip.
#[test]
fn e2e_add_mutate_reload_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = persist::inventory_path(dir.path());

    let mut store = InventoryStore::load(path.clone());
    assert!(store.products().is_empty(), "fresh store must start empty");

    let milk = store.add(&input("Milk", "2", "1,99", "15/03/2030")).unwrap();
    let rice = store.add(&input("Rice", "5", "3.50", "")).unwrap();

    store.adjust_quantity(milk, -1);
    store
        .update(rice, &input("Brown Rice", "4", "3.80", ""))
        .unwrap();

    // A brand-new store instance sees exactly the mutated collection.
    let reloaded = InventoryStore::load(path);
    assert_eq!(reloaded.products().len(), 2);

    // Newest-first order: Rice (renamed) was added last.
    assert_eq!(reloaded.products()[0].name, "Brown Rice");
    assert_eq!(reloaded.products()[0].quantity, 4);
    assert_eq!(reloaded.products()[1].name, "Milk");
    assert_eq!(reloaded.products()[1].quantity, 1);
    assert_eq!(
        reloaded.products()[1].expiry_date.as_deref(),
        Some("2030-03-15"),
        "slash-form expiry must be stored canonically"
    );
    assert_eq!(reloaded.products()[0].expiry_date, None);
}

/// A failed validation must leave both memory and disk untouched.
#[test]
fn e2e_validation_failure_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = persist::inventory_path(dir.path());

    let mut store = InventoryStore::load(path.clone());
    store.add(&input("Milk", "2", "1.99", "")).unwrap();

    assert!(store.add(&input("  ", "9", "9.99", "")).is_err());
    assert_eq!(store.products().len(), 1);
    assert_eq!(InventoryStore::load(path).products().len(), 1);
}

/// A corrupt inventory file starts the app with an empty collection and
/// is overwritten by the next mutation.
#[test]
fn e2e_corrupt_file_recovers_on_next_save() {
    let dir = TempDir::new().unwrap();
    let path = persist::inventory_path(dir.path());
    std::fs::create_dir_all(dir.path()).unwrap();
    std::fs::write(&path, b"{{{ definitely not json").unwrap();

    let mut store = InventoryStore::load(path.clone());
    assert!(store.products().is_empty());

    store.add(&input("Milk", "1", "1.00", "")).unwrap();
    assert_eq!(InventoryStore::load(path).products().len(), 1);
}

// =============================================================================
// Filtering and aggregation over a stored collection
// =============================================================================

/// The filter pipeline and aggregator agree with the store's contents.
#[test]
fn e2e_filter_and_totals_over_store() {
    let dir = TempDir::new().unwrap();
    let path = persist::inventory_path(dir.path());
    let mut store = InventoryStore::load(path);

    store.add(&input("Milk", "2", "10", "2099-01-01")).unwrap();
    store.add(&input("Old Milk", "5", "2", "2000-01-01")).unwrap();
    store.add(&input("Flour", "0", "5", "")).unwrap();

    let products = store.products();

    let in_stock = filter::visible(products, FilterMode::InStock, "");
    assert_eq!(in_stock.len(), 1, "expired and empty products excluded");
    assert_eq!(products[in_stock[0]].name, "Milk");

    let out_of_stock = filter::visible(products, FilterMode::OutOfStock, "");
    assert_eq!(out_of_stock.len(), 1);
    assert_eq!(products[out_of_stock[0]].name, "Flour");

    let expired = filter::visible(products, FilterMode::Expired, "");
    assert_eq!(expired.len(), 1);
    assert_eq!(products[expired[0]].name, "Old Milk");

    let searched = filter::visible(products, FilterMode::All, "milk");
    assert_eq!(searched.len(), 2);

    let totals = stats::totals(products);
    assert_eq!(totals.count, 3);
    assert_eq!(totals.in_stock_count, 2, "expiry ignored for in-stock count");
    assert_eq!(totals.total_value_display(), "30.00"); // 2*10 + 5*2 + 0*5
}

/// Search must match category text as well as name, case-insensitively.
#[test]
fn e2e_search_matches_category() {
    let dir = TempDir::new().unwrap();
    let mut store = InventoryStore::load(persist::inventory_path(dir.path()));

    let mut cheese = input("Queijo", "1", "4.50", "");
    cheese.category = "Lacticínios".to_string();
    store.add(&cheese).unwrap();
    store.add(&input("Bread", "1", "1.50", "")).unwrap();

    let hits = filter::visible(store.products(), FilterMode::All, "lact");
    assert_eq!(hits.len(), 1);
    assert_eq!(store.products()[hits[0]].name, "Queijo");
}
