//! Audit log entries recorded for every stock removal.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{extended_value, Displayable};

/// Kind of stock movement captured by a [`Transaction`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionAction {
    Removed,
}

impl fmt::Display for TransactionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionAction::Removed => "removed",
        };
        f.write_str(label)
    }
}

/// Immutable record of a single stock decrement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub user: String,
    pub action: TransactionAction,
    pub category: String,
    pub item: String,
    pub quantity: u64,
    pub remaining_quantity: u64,
    pub price: f64,
    pub total_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Builds a removal entry stamped with the current time.
    ///
    /// `total_value` is always derived from `quantity` and `price`.
    pub fn removal(
        user: impl Into<String>,
        category: impl Into<String>,
        item: impl Into<String>,
        quantity: u64,
        remaining_quantity: u64,
        price: f64,
    ) -> Self {
        Self {
            user: user.into(),
            action: TransactionAction::Removed,
            category: category.into(),
            item: item.into(),
            quantity,
            remaining_quantity,
            price,
            total_value: extended_value(quantity, price),
            timestamp: Some(Utc::now()),
        }
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!(
            "{} {} {} x {} from {}",
            self.user, self.action, self.quantity, self.item, self.category
        )
    }
}
