//! Configuration for auditpack.
//!
//! All settings come from the process environment, read once at startup
//! into plain structs that are passed by parameter. Nothing here holds
//! global state.

pub mod env;
pub mod settings;

pub use env::{load_dotenv, vars, ConfigError};
pub use settings::{Config, DbConfig, StorageConfig};
