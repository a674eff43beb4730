//! Session-scoped facade that owns the loaded document and its storage.

use std::path::Path;

use tracing::{debug, error};

use crate::core::errors::{InventoryError, Result};
use crate::core::services::{CatalogService, ReportService, StockService};
use crate::domain::{
    InventoryDocument, ItemRecord, LowStockReport, RecentTransactions, StockReport, Transaction,
    ValuationReport,
};
use crate::storage::DocumentStorage;

/// Lifecycle of the store. Every operation requires `Ready`.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreState {
    Uninitialized,
    Ready(InventoryDocument),
}

/// Owns the inventory document for one session and the user acting on it.
pub struct InventoryStore {
    state: StoreState,
    user: String,
    storage: Box<dyn DocumentStorage>,
}

impl InventoryStore {
    /// Creates an `Uninitialized` store; call [`InventoryStore::load`] next.
    pub fn new(storage: Box<dyn DocumentStorage>, user: impl Into<String>) -> Self {
        Self {
            state: StoreState::Uninitialized,
            user: user.into(),
            storage,
        }
    }

    /// Creates a store and loads its document in one step.
    pub fn open(storage: Box<dyn DocumentStorage>, user: impl Into<String>) -> Result<Self> {
        let mut store = Self::new(storage, user);
        store.load()?;
        Ok(store)
    }

    /// Reads the document from storage, moving the store to `Ready`.
    ///
    /// A failed load keeps the current state; no placeholder document is
    /// ever substituted.
    pub fn load(&mut self) -> Result<()> {
        let document = self.storage.load()?;
        debug!(location = %self.storage.location().display(), "store ready");
        self.state = StoreState::Ready(document);
        Ok(())
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, StoreState::Ready(_))
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn storage_location(&self) -> &Path {
        self.storage.location()
    }

    pub fn document(&self) -> Result<&InventoryDocument> {
        match &self.state {
            StoreState::Ready(document) => Ok(document),
            StoreState::Uninitialized => Err(InventoryError::NotLoaded),
        }
    }

    pub fn list_categories(&self) -> Result<Vec<String>> {
        Ok(CatalogService::list_categories(self.document()?))
    }

    pub fn list_items(&self, category: &str) -> Result<Vec<String>> {
        CatalogService::list_items(self.document()?, category)
    }

    pub fn item(&self, category: &str, item: &str) -> Result<ItemRecord> {
        CatalogService::item(self.document()?, category, item).copied()
    }

    /// Removes stock and records the transaction, all or nothing.
    ///
    /// The change is staged on a copy of the document and only becomes the
    /// live document once storage has accepted it, so a failed save leaves
    /// memory and disk identical.
    pub fn remove_item(&mut self, category: &str, item: &str, quantity: u64) -> Result<Transaction> {
        let mut staged = self.document()?.clone();
        let transaction = StockService::remove(&mut staged, &self.user, category, item, quantity)?;

        if let Err(err) = self.storage.save(&staged) {
            error!(category, item, quantity, error = %err, "removal discarded: save failed");
            return Err(match err {
                InventoryError::Persistence(_) => err,
                other => InventoryError::Persistence(other.to_string()),
            });
        }

        self.state = StoreState::Ready(staged);
        Ok(transaction)
    }

    pub fn current_stock(&self) -> Result<StockReport> {
        Ok(ReportService::current_stock(self.document()?))
    }

    pub fn recent_transactions(&self, limit: usize) -> Result<RecentTransactions> {
        Ok(ReportService::recent_transactions(self.document()?, limit))
    }

    pub fn low_stock_items(&self, threshold: u64) -> Result<LowStockReport> {
        Ok(ReportService::low_stock_items(self.document()?, threshold))
    }

    pub fn low_stock_threshold(&self) -> Result<u64> {
        Ok(self.document()?.low_stock_threshold())
    }

    pub fn total_inventory_value(&self) -> Result<ValuationReport> {
        Ok(ReportService::total_inventory_value(self.document()?))
    }
}
