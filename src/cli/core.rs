//! Shared CLI types: run mode, loop control and per-step errors.

use thiserror::Error;

pub use crate::core::errors::CliError;
use crate::core::errors::InventoryError;

use super::output;

/// Environment variable that switches the shell to line-per-answer stdin mode.
pub const SCRIPT_ENV: &str = "INVENTORY_CORE_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    pub fn from_env() -> Self {
        if std::env::var_os(SCRIPT_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Outcome of a single menu step that did not succeed.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    Core(#[from] InventoryError),
    #[error("exit requested")]
    ExitRequested,
}

/// Prints a step failure. Only errors that end the session are returned.
pub fn report_error(err: CommandError) -> Result<(), CliError> {
    match err {
        CommandError::ExitRequested => Ok(()),
        CommandError::InvalidInput(message) => {
            output::error(&message);
            output::hint("Enter a number from the list, or `0` to go back.");
            Ok(())
        }
        CommandError::Core(InventoryError::InsufficientStock {
            item,
            requested,
            available,
            ..
        }) => {
            output::warning(format!(
                "Cannot remove {requested} x {item}: only {available} in stock."
            ));
            Ok(())
        }
        CommandError::Core(InventoryError::Persistence(message)) => {
            output::error(format!("Could not save the inventory: {message}"));
            output::hint("No changes were applied. The file on disk is unchanged.");
            Ok(())
        }
        CommandError::Core(InventoryError::InvalidInput(message)) => {
            output::error(&message);
            Ok(())
        }
        CommandError::Core(err) => Err(CliError::Core(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_failures_keep_the_session_alive() {
        assert!(report_error(CommandError::InvalidInput("nope".into())).is_ok());
        assert!(report_error(CommandError::ExitRequested).is_ok());
        let insufficient = InventoryError::InsufficientStock {
            category: "Fruit".into(),
            item: "Apple".into(),
            requested: 100,
            available: 7,
        };
        assert!(report_error(insufficient.into()).is_ok());
        assert!(report_error(InventoryError::Persistence("disk full".into()).into()).is_ok());
    }

    #[test]
    fn unexpected_core_errors_end_the_session() {
        let err = report_error(InventoryError::NotLoaded.into()).unwrap_err();
        assert!(matches!(err, CliError::Core(InventoryError::NotLoaded)));
    }
}
