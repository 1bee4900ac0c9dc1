//! PostgreSQL access for auditpack.
//!
//! One connection, no pool: the pipeline is a one-shot job and holds a
//! single `PgConnection` for its whole lifetime. This crate covers the
//! three database-facing operations: connecting, enumerating audit
//! tables from the catalog, and streaming a table out as CSV.

pub mod connection;
pub mod error;
pub mod tables;

pub use connection::connect;
pub use error::DbError;
pub use tables::{copy_table_csv, discover_audit_tables, TableRef};
