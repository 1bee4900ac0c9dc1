//! Database error types.

use thiserror::Error;

/// Database errors.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to connect to {host}:{port}/{database}: {source}")]
    Connect {
        host: String,
        port: u16,
        database: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("catalog query failed: {0}")]
    Discover(#[source] sqlx::Error),

    #[error("copy-out of {table} failed: {source}")]
    CopyOut {
        table: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
