pub mod core;
pub mod flow;
pub mod input;
pub mod output;
pub mod reports;
pub mod selection;
mod shell;
pub mod ui;

pub use shell::run_cli;
