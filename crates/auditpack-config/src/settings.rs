//! Typed settings resolved from the environment.

use crate::env::{self, vars, ConfigError};

/// PostgreSQL connection parameters.
///
/// Every field has a default suitable for a local test database, so the
/// tool runs against a developer instance with no environment set up.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl DbConfig {
    /// Resolve connection parameters from `DB_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::get_or(vars::DB_HOST, "localhost"),
            port: env::get_parsed_or(vars::DB_PORT, 5432)?,
            database: env::get_or(vars::DB_NAME, "testdatabase"),
            user: env::get_or(vars::DB_USER, "testuser"),
            password: env::get_or(vars::DB_PASSWORD, "testpassword"),
        })
    }
}

/// Object storage destination.
///
/// None of these have defaults. They stay optional here and are validated
/// where they are first needed, so discovery-only invocations work without
/// any storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Destination bucket (`S3_BUCKET_NAME`).
    pub bucket: Option<String>,
    /// Bucket region (`S3_REGION`); the SDK's default provider chain
    /// decides when unset.
    pub region: Option<String>,
    /// Deployment environment tag (`env`), used as the object key prefix.
    pub environment: Option<String>,
}

impl StorageConfig {
    /// Resolve storage settings from the environment.
    pub fn from_env() -> Self {
        Self {
            bucket: env::get(vars::S3_BUCKET_NAME),
            region: env::get(vars::S3_REGION),
            environment: env::get(vars::ENVIRONMENT),
        }
    }
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub db: DbConfig,
    pub storage: StorageConfig,
}

impl Config {
    /// Read the whole configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            db: DbConfig::from_env()?,
            storage: StorageConfig::from_env(),
        })
    }
}
