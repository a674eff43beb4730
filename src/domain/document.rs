use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{catalog::Catalog, transaction::Transaction};

/// The complete persisted inventory: catalog, removal log and alert threshold.
///
/// The transaction log is append-only; the only way to extend it is
/// [`InventoryDocument::append_transaction`], and nothing removes entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryDocument {
    categories: Catalog,
    #[serde(default)]
    transactions: Vec<Transaction>,
    low_stock_threshold: u64,
    /// Top-level fields this program does not interpret, written back untouched.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl InventoryDocument {
    pub fn new(categories: Catalog, low_stock_threshold: u64) -> Self {
        Self {
            categories,
            transactions: Vec::new(),
            low_stock_threshold,
            extra: Map::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.categories
    }

    pub(crate) fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.categories
    }

    /// Transactions in the order they were recorded, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn append_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn low_stock_threshold(&self) -> u64 {
        self.low_stock_threshold
    }
}
