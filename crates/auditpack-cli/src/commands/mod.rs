//! Subcommand implementations.

mod run;
mod tables;

pub use run::RunCommand;
pub use tables::{OutputFormat, TablesCommand};
