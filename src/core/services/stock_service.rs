//! Stock decrements and the transaction they leave behind.

use tracing::{info, warn};

use crate::core::errors::{InventoryError, Result};
use crate::domain::{Displayable, InventoryDocument, Transaction};

/// Applies removals to an in-memory document. Persistence is the caller's job.
pub struct StockService;

impl StockService {
    /// Removes `quantity` units of `item` from `category` on behalf of `user`.
    ///
    /// On error the document is left exactly as it was.
    pub fn remove(
        document: &mut InventoryDocument,
        user: &str,
        category: &str,
        item: &str,
        quantity: u64,
    ) -> Result<Transaction> {
        if quantity == 0 {
            return Err(InventoryError::InvalidInput(
                "quantity to remove must be a positive whole number".into(),
            ));
        }

        let record = document
            .catalog_mut()
            .category_mut(category)
            .ok_or_else(|| InventoryError::CategoryNotFound(category.to_string()))?
            .item_mut(item)
            .ok_or_else(|| InventoryError::ItemNotFound {
                category: category.to_string(),
                item: item.to_string(),
            })?;

        if quantity > record.quantity {
            warn!(
                category,
                item,
                requested = quantity,
                available = record.quantity,
                "rejected removal: insufficient stock"
            );
            return Err(InventoryError::InsufficientStock {
                category: category.to_string(),
                item: item.to_string(),
                requested: quantity,
                available: record.quantity,
            });
        }

        record.quantity -= quantity;
        let transaction =
            Transaction::removal(user, category, item, quantity, record.quantity, record.price);
        document.append_transaction(transaction.clone());

        info!(
            entry = %transaction.display_label(),
            remaining = transaction.remaining_quantity,
            "stock removed"
        );
        Ok(transaction)
    }
}
