//! Environment variable handling.

use std::env;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

/// Environment variable names.
pub mod vars {
    // Database connection
    pub const DB_HOST: &str = "DB_HOST";
    pub const DB_PORT: &str = "DB_PORT";
    pub const DB_NAME: &str = "DB_NAME";
    pub const DB_USER: &str = "DB_USER";
    pub const DB_PASSWORD: &str = "DB_PASSWORD";

    // Object storage
    pub const S3_BUCKET_NAME: &str = "S3_BUCKET_NAME";
    pub const S3_REGION: &str = "S3_REGION";

    /// Deployment environment tag, used as the upload key prefix.
    /// Lowercase by convention of the invoking pipeline.
    pub const ENVIRONMENT: &str = "env";
}

/// Load variables from a `.env` file if one is present.
///
/// A missing file is not an error; real deployments inject variables
/// through the pipeline environment instead.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Get an optional string variable.
pub fn get(var: &str) -> Option<String> {
    env::var(var).ok()
}

/// Get a variable with a default value.
pub fn get_or(var: &str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| default.to_string())
}

/// Get a parseable variable with a default value.
pub fn get_parsed_or<T: std::str::FromStr>(var: &str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(v) => v.parse().map_err(|_| ConfigError::InvalidValue {
            var: var.to_string(),
            message: format!("could not parse {v:?}"),
        }),
        Err(_) => Ok(default),
    }
}
