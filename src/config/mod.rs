//! Persistent user preferences: where the inventory lives, backup retention,
//! report sizes and output styling.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;

use crate::core::utils::PathResolver;

pub fn default_manager() -> Result<ConfigManager, ConfigError> {
    ConfigManager::with_base_dir(PathResolver::base_dir())
}
