mod common;

use std::{fs, path::Path, path::PathBuf, thread, time::Duration};

use inventory_core::{
    core::{InventoryError, InventoryStore},
    storage::{DocumentStorage, JsonStorage},
};

use common::{fruit_fixture, read_json};

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}

#[test]
fn failed_save_leaves_file_and_memory_unchanged() {
    let path = fruit_fixture();
    let original = fs::read_to_string(&path).unwrap();
    let mut store =
        InventoryStore::open(Box::new(JsonStorage::without_backups(&path)), "sam").unwrap();
    let document_before = store.document().unwrap().clone();

    // A directory squatting on the temp file name makes File::create fail.
    fs::create_dir_all(tmp_path_for(&path)).unwrap();

    let err = store.remove_item("Fruit", "Apple", 3).unwrap_err();
    assert!(matches!(err, InventoryError::Persistence(_)));

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
    assert_eq!(store.document().unwrap(), &document_before);
    assert_eq!(store.item("Fruit", "Apple").unwrap().quantity, 10);
    assert!(store.document().unwrap().transactions().is_empty());
}

#[test]
fn store_recovers_once_storage_works_again() {
    let path = fruit_fixture();
    let mut store =
        InventoryStore::open(Box::new(JsonStorage::without_backups(&path)), "sam").unwrap();
    let blocker = tmp_path_for(&path);
    fs::create_dir_all(&blocker).unwrap();
    assert!(store.remove_item("Fruit", "Apple", 3).is_err());

    fs::remove_dir(&blocker).unwrap();
    let transaction = store.remove_item("Fruit", "Apple", 3).unwrap();
    assert_eq!(transaction.remaining_quantity, 7);
    assert_eq!(read_json(&path)["categories"]["Fruit"]["Apple"]["quantity"], 7);
}

#[test]
fn failed_backup_aborts_the_save() {
    let path = fruit_fixture();
    let original = fs::read(&path).unwrap();
    let storage = JsonStorage::new(&path, Some(3));
    // A regular file where the backups directory should go.
    fs::write(storage.backups_dir(), "not a directory").unwrap();
    let mut store = InventoryStore::open(Box::new(storage), "sam").unwrap();

    let err = store.remove_item("Fruit", "Apple", 3).unwrap_err();
    assert!(matches!(err, InventoryError::Persistence(_)));

    assert_eq!(fs::read(&path).unwrap(), original);
    assert_eq!(store.item("Fruit", "Apple").unwrap().quantity, 10);
    assert!(store.document().unwrap().transactions().is_empty());
}

#[test]
fn backups_rotate_to_retention() {
    let path = fruit_fixture();
    let storage = JsonStorage::new(&path, Some(2));
    let backups_dir = storage.backups_dir().to_path_buf();
    let mut store = InventoryStore::open(Box::new(storage), "sam").unwrap();

    for _ in 0..4 {
        store.remove_item("Fruit", "Apple", 1).unwrap();
        thread::sleep(Duration::from_millis(2));
    }

    let listing = JsonStorage::new(&path, Some(2)).list_backups().unwrap();
    assert_eq!(listing.len(), 2);
    assert!(listing.iter().all(|name| name.starts_with("category_")));
    assert_eq!(fs::read_dir(&backups_dir).unwrap().count(), 2);

    // Newest backup holds the state before the last removal.
    let newest = read_json(&backups_dir.join(&listing[0]));
    assert_eq!(newest["categories"]["Fruit"]["Apple"]["quantity"], 7);
}

#[test]
fn zero_retention_writes_no_backups() {
    let path = fruit_fixture();
    let storage = JsonStorage::without_backups(&path);
    let backups_dir = storage.backups_dir().to_path_buf();
    let document = storage.load().unwrap();
    storage.save(&document).unwrap();
    assert!(!backups_dir.exists());
}
