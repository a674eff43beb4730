//! Two-level keyed catalog: category name -> item name -> [`ItemRecord`].
//!
//! Both levels keep insertion order, which is the order categories and items
//! were read from disk and the order numbered menus present them in.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::item::ItemRecord;

/// Items of one category keyed by item name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Category {
    items: IndexMap<String, ItemRecord>,
}

impl Category {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, name: impl Into<String>, record: ItemRecord) -> Self {
        self.insert(name, record);
        self
    }

    /// Inserts or replaces an item, keeping its original position on replace.
    pub fn insert(&mut self, name: impl Into<String>, record: ItemRecord) {
        self.items.insert(name.into(), record);
    }

    pub fn item(&self, name: &str) -> Option<&ItemRecord> {
        self.items.get(name)
    }

    pub fn item_mut(&mut self, name: &str) -> Option<&mut ItemRecord> {
        self.items.get_mut(name)
    }

    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ItemRecord)> {
        self.items.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `quantity * price` over every item.
    pub fn subtotal(&self) -> f64 {
        self.items.values().map(ItemRecord::stock_value).sum()
    }
}

/// Every category of the inventory keyed by category name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Catalog {
    categories: IndexMap<String, Category>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, name: impl Into<String>, category: Category) -> Self {
        self.categories.insert(name.into(), category);
        self
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.get_mut(name)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories
            .iter()
            .map(|(name, category)| (name.as_str(), category))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.categories.values().map(Category::len).sum()
    }
}
