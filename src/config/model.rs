use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::{services::DEFAULT_RECENT_LIMIT, utils::PathResolver};
use crate::storage::json_backend::DEFAULT_RETENTION;

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Inventory document opened when no path is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    #[serde(default = "Config::default_recent_limit")]
    pub recent_transactions_limit: usize,
    /// Number of previous inventory versions kept in `backups/`; 0 disables backups.
    #[serde(default = "Config::default_backup_retention")]
    pub backup_retention: usize,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            recent_transactions_limit: Self::default_recent_limit(),
            backup_retention: Self::default_backup_retention(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_recent_limit() -> usize {
        DEFAULT_RECENT_LIMIT
    }

    pub fn default_backup_retention() -> usize {
        DEFAULT_RETENTION
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Picks the inventory file: explicit argument, then config, then
    /// `category.json` in the working directory.
    pub fn resolve_data_file(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        self.data_file
            .clone()
            .unwrap_or_else(PathResolver::default_data_file)
    }
}
