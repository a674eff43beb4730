pub mod catalog;
pub mod common;
pub mod document;
pub mod item;
pub mod report;
pub mod transaction;

pub use catalog::{Catalog, Category};
pub use common::Displayable;
pub use document::InventoryDocument;
pub use item::ItemRecord;
pub use report::{
    CategoryLowStock, CategoryStock, CategoryValuation, ItemStock, LowStockReport,
    RecentTransactions, StockReport, ValuationReport,
};
pub use transaction::{Transaction, TransactionAction};
