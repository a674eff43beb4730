//! Derived, read-only reports over the current document.

use crate::domain::{
    CategoryLowStock, CategoryStock, CategoryValuation, InventoryDocument, ItemRecord, ItemStock,
    LowStockReport, RecentTransactions, StockReport, ValuationReport,
};

/// Number of transactions shown by the recent-transactions report by default.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

pub struct ReportService;

impl ReportService {
    pub fn current_stock(document: &InventoryDocument) -> StockReport {
        let categories = document
            .catalog()
            .iter()
            .map(|(name, category)| CategoryStock {
                name: name.to_string(),
                items: category
                    .iter()
                    .map(|(item, record)| item_stock(item, record))
                    .collect(),
            })
            .collect();
        StockReport { categories }
    }

    /// The last `limit` transactions, newest first.
    pub fn recent_transactions(document: &InventoryDocument, limit: usize) -> RecentTransactions {
        let log = document.transactions();
        let entries = log.iter().rev().take(limit).cloned().collect();
        RecentTransactions {
            entries,
            total_recorded: log.len(),
        }
    }

    /// Items whose quantity is at or below `threshold`, grouped by category.
    pub fn low_stock_items(document: &InventoryDocument, threshold: u64) -> LowStockReport {
        let categories = document
            .catalog()
            .iter()
            .filter_map(|(name, category)| {
                let items: Vec<ItemStock> = category
                    .iter()
                    .filter(|(_, record)| record.is_low_stock(threshold))
                    .map(|(item, record)| item_stock(item, record))
                    .collect();
                (!items.is_empty()).then(|| CategoryLowStock {
                    name: name.to_string(),
                    items,
                })
            })
            .collect();
        LowStockReport {
            threshold,
            categories,
        }
    }

    pub fn total_inventory_value(document: &InventoryDocument) -> ValuationReport {
        let categories: Vec<CategoryValuation> = document
            .catalog()
            .iter()
            .map(|(name, category)| CategoryValuation {
                name: name.to_string(),
                item_count: category.len(),
                subtotal: category.subtotal(),
            })
            .collect();
        let grand_total = categories.iter().map(|entry| entry.subtotal).sum();
        ValuationReport {
            categories,
            grand_total,
        }
    }
}

fn item_stock(name: &str, record: &ItemRecord) -> ItemStock {
    ItemStock {
        name: name.to_string(),
        quantity: record.quantity,
        price: record.price,
    }
}
