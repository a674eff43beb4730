//! Read-only views computed from an [`InventoryDocument`](super::InventoryDocument).

use serde::Serialize;

use super::transaction::Transaction;

/// One item line inside a stock or low-stock report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ItemStock {
    pub name: String,
    pub quantity: u64,
    pub price: f64,
}

/// Stock levels of every item in one category.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryStock {
    pub name: String,
    pub items: Vec<ItemStock>,
}

/// Current stock of the whole catalog, in catalog order.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct StockReport {
    pub categories: Vec<CategoryStock>,
}

impl StockReport {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Most recent transactions, newest first.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RecentTransactions {
    pub entries: Vec<Transaction>,
    /// Size of the whole log, not just the returned window.
    pub total_recorded: usize,
}

impl RecentTransactions {
    /// True when the log holds no transactions at all, regardless of the
    /// window size.
    pub fn is_empty(&self) -> bool {
        self.total_recorded == 0
    }
}

/// Items at or below the threshold within one category.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryLowStock {
    pub name: String,
    pub items: Vec<ItemStock>,
}

/// Low-stock alert listing; categories without qualifying items are absent.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct LowStockReport {
    pub threshold: u64,
    pub categories: Vec<CategoryLowStock>,
}

impl LowStockReport {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|category| category.items.len()).sum()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryValuation {
    pub name: String,
    pub item_count: usize,
    pub subtotal: f64,
}

/// Value of stock on hand per category plus the grand total.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ValuationReport {
    pub categories: Vec<CategoryValuation>,
    pub grand_total: f64,
}

impl ValuationReport {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn subtotal(&self, category: &str) -> Option<f64> {
        self.categories
            .iter()
            .find(|entry| entry.name == category)
            .map(|entry| entry.subtotal)
    }
}
