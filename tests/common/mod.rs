#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub const FRUIT_DOCUMENT: &str = r#"{
  "categories": {
    "Fruit": {
      "Apple": { "quantity": 10, "price": 2.0 },
      "Pear": { "quantity": 4, "price": 1.5 }
    }
  },
  "transactions": [],
  "low_stock_threshold": 5
}"#;

pub const TWO_CATEGORY_DOCUMENT: &str = r#"{
  "categories": {
    "A": { "x": { "quantity": 2, "price": 3.0 } },
    "B": { "y": { "quantity": 1, "price": 5.0 } }
  },
  "low_stock_threshold": 0
}"#;

/// Creates an isolated directory that outlives the calling test.
pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

pub fn write_document(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture document");
    path
}

/// Writes the Fruit fixture into a fresh directory and returns its path.
pub fn fruit_fixture() -> PathBuf {
    write_document(&temp_dir(), "category.json", FRUIT_DOCUMENT)
}

pub fn read_json(path: &Path) -> serde_json::Value {
    let data = fs::read_to_string(path).expect("read document");
    serde_json::from_str(&data).expect("parse document")
}
