use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}

impl From<ConfigError> for crate::core::errors::CliError {
    fn from(err: ConfigError) -> Self {
        crate::core::errors::CliError::Config(err.to_string())
    }
}
