//! lu-cli library
//!
//! Command parsing and execution for the `linkup` binary.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod theme_commands;

#[cfg(test)]
mod tests;

pub use app::{App, Interaction};
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use theme_commands::ThemeCommands;
