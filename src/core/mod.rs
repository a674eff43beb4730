pub mod errors;
pub mod inventory_store;
pub mod services;
pub mod utils;
pub mod validation;

pub use errors::{CliError, InventoryError, Result};
pub use inventory_store::{InventoryStore, StoreState};
