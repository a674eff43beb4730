use std::io;
use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the domain, service and storage layers.
#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Inventory not loaded")]
    NotLoaded,
    #[error("Inventory file not found: {0}")]
    DocumentNotFound(String),
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Item `{item}` not found in category `{category}`")]
    ItemNotFound { category: String, item: String },
    #[error("Malformed inventory data: {0}")]
    MalformedData(String),
    #[error(
        "Insufficient stock for `{item}` in `{category}`: requested {requested}, only {available} available"
    )]
    InsufficientStock {
        category: String,
        item: String,
        requested: u64,
        available: u64,
    },
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl InventoryError {
    /// Missing storage, category or item.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            InventoryError::DocumentNotFound(_)
                | InventoryError::CategoryNotFound(_)
                | InventoryError::ItemNotFound { .. }
        )
    }

    /// Quantity still on hand when a removal was rejected for lack of stock.
    pub fn available_quantity(&self) -> Option<u64> {
        match self {
            InventoryError::InsufficientStock { available, .. } => Some(*available),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, InventoryError>;

impl From<io::Error> for InventoryError {
    fn from(err: io::Error) -> Self {
        InventoryError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            InventoryError::Persistence(err.to_string())
        } else {
            InventoryError::MalformedData(err.to_string())
        }
    }
}

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] InventoryError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Terminal error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
