mod common;

use inventory_core::{core::InventoryStore, storage::JsonStorage};

use common::{fruit_fixture, temp_dir, write_document, TWO_CATEGORY_DOCUMENT};

fn open(path: &std::path::Path) -> InventoryStore {
    InventoryStore::open(Box::new(JsonStorage::without_backups(path)), "sam").unwrap()
}

#[test]
fn valuation_per_category_and_grand_total() {
    let path = write_document(&temp_dir(), "inventory.json", TWO_CATEGORY_DOCUMENT);
    let store = open(&path);
    let report = store.total_inventory_value().unwrap();
    assert_eq!(report.subtotal("A"), Some(6.0));
    assert_eq!(report.subtotal("B"), Some(5.0));
    assert_eq!(report.grand_total, 11.0);
}

#[test]
fn reports_are_idempotent() {
    let path = fruit_fixture();
    let store = open(&path);
    assert_eq!(store.current_stock().unwrap(), store.current_stock().unwrap());
    assert_eq!(
        store.low_stock_items(5).unwrap(),
        store.low_stock_items(5).unwrap()
    );
    assert_eq!(
        store.total_inventory_value().unwrap(),
        store.total_inventory_value().unwrap()
    );
}

#[test]
fn recent_transactions_are_newest_first_and_limited() {
    let path = fruit_fixture();
    let mut store = open(&path);
    assert!(store.recent_transactions(10).unwrap().is_empty());

    store.remove_item("Fruit", "Apple", 1).unwrap();
    store.remove_item("Fruit", "Pear", 1).unwrap();
    store.remove_item("Fruit", "Apple", 2).unwrap();

    let recent = store.recent_transactions(2).unwrap();
    assert_eq!(recent.total_recorded, 3);
    assert_eq!(recent.entries.len(), 2);
    assert_eq!(recent.entries[0].quantity, 2);
    assert_eq!(recent.entries[1].item, "Pear");
}

#[test]
fn zero_limit_window_is_not_an_empty_log() {
    let path = fruit_fixture();
    let mut store = open(&path);
    store.remove_item("Fruit", "Apple", 1).unwrap();

    let recent = store.recent_transactions(0).unwrap();
    assert!(recent.entries.is_empty());
    assert_eq!(recent.total_recorded, 1);
    assert!(!recent.is_empty());
}

#[test]
fn low_stock_lists_only_qualifying_categories() {
    let dir = temp_dir();
    let path = write_document(
        &dir,
        "mixed.json",
        r#"{
          "categories": {
            "Fruit": {"Apple": {"quantity": 2, "price": 1.0}, "Pear": {"quantity": 9, "price": 1.0}},
            "Dairy": {"Milk": {"quantity": 20, "price": 1.0}}
          },
          "low_stock_threshold": 3
        }"#,
    );
    let store = open(&path);
    let report = store.low_stock_items(3).unwrap();
    assert_eq!(report.categories.len(), 1);
    assert_eq!(report.categories[0].name, "Fruit");
    assert_eq!(report.categories[0].items[0].name, "Apple");

    assert!(store.low_stock_items(1).unwrap().is_empty());
}
