use serde::{Deserialize, Serialize};

use super::common::extended_value;

/// Stock level and unit price of a single item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ItemRecord {
    pub quantity: u64,
    pub price: f64,
}

impl ItemRecord {
    pub fn new(quantity: u64, price: f64) -> Self {
        Self { quantity, price }
    }

    /// Quantity on hand multiplied by unit price.
    pub fn stock_value(&self) -> f64 {
        extended_value(self.quantity, self.price)
    }

    pub fn is_low_stock(&self, threshold: u64) -> bool {
        self.quantity <= threshold
    }
}
