use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use super::{Config, ConfigError};
use crate::core::utils::{write_file_atomic, PathResolver};

/// Handles persistence of [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        let config_dir = PathResolver::config_dir_in(&base);
        fs::create_dir_all(&config_dir)?;
        Ok(Self::new(PathResolver::config_file_in(&base)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    /// Loads the config, writing the defaults to disk on first run so they
    /// can be edited by hand.
    pub fn load_or_init(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            return self.load();
        }
        let config = Config::default();
        self.save(&config)?;
        info!(path = %self.config_path.display(), "default configuration written");
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        write_file_atomic(&self.config_path, &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_loads_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
        assert!(!manager.config_path().exists());
    }

    #[test]
    fn load_or_init_writes_defaults_once() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        manager.load_or_init().unwrap();
        assert!(manager.config_path().exists());

        let custom = Config {
            backup_retention: 1,
            ..Config::default()
        };
        manager.save(&custom).unwrap();
        assert_eq!(manager.load_or_init().unwrap(), custom);
    }

    #[test]
    fn corrupt_config_is_a_serde_error() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.config_path(), "not json").unwrap();
        assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
    }
}
