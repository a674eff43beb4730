pub mod json_backend;

use std::path::Path;

use crate::{core::errors::Result, domain::InventoryDocument};

/// Abstraction over the location an inventory document is loaded from and
/// written back to.
pub trait DocumentStorage: Send + Sync {
    /// Reads and validates the stored document.
    fn load(&self) -> Result<InventoryDocument>;

    /// Replaces the stored document with `document`. On failure the previous
    /// content must still be readable.
    fn save(&self, document: &InventoryDocument) -> Result<()>;

    /// Human-readable location, used in diagnostics.
    fn location(&self) -> &Path;
}

pub use json_backend::{load_document_from_path, save_document_to_path, JsonStorage};
