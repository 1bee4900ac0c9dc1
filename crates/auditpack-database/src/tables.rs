//! Audit table discovery and CSV copy-out.

use crate::error::DbError;
use futures_util::TryStreamExt;
use serde::Serialize;
use sqlx::postgres::PgConnection;
use std::fmt;
use std::io::Write;
use tracing::debug;

/// A (schema, table) pair identifying one discovered audit table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRef {
    pub schema: String,
    pub name: String,
}

impl TableRef {
    /// Fully qualified, quoted identifier for use in SQL.
    pub fn qualified(&self) -> String {
        format!("{}.{}", quote_ident(&self.schema), quote_ident(&self.name))
    }

    /// Archive member name for this table's CSV.
    pub fn member_name(&self) -> String {
        format!("{}.{}.csv", self.schema, self.name)
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.schema, self.name)
    }
}

/// Double-quote an identifier, escaping embedded quotes.
fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Base tables (not views) whose name contains "audit", case-insensitive,
/// across every schema visible to the connecting role. No ORDER BY: member
/// order in the archive follows whatever the server returns.
const AUDIT_TABLE_QUERY: &str = "\
    SELECT table_schema::text, table_name::text \
    FROM information_schema.tables \
    WHERE table_type = 'BASE TABLE' \
      AND LOWER(table_name) LIKE '%audit%'";

/// Enumerate the audit tables visible on this connection.
///
/// An empty result is not an error; the caller decides whether that ends
/// the run.
pub async fn discover_audit_tables(conn: &mut PgConnection) -> Result<Vec<TableRef>, DbError> {
    let rows: Vec<(String, String)> = sqlx::query_as(AUDIT_TABLE_QUERY)
        .fetch_all(&mut *conn)
        .await
        .map_err(DbError::Discover)?;

    Ok(rows
        .into_iter()
        .map(|(schema, name)| TableRef { schema, name })
        .collect())
}

/// Stream one table's full contents as CSV into `out`.
///
/// Uses a server-side `COPY ... TO STDOUT` with CSV formatting and a
/// header row, so quoting and NULL rendering are exactly what the server
/// emits. Returns the number of bytes written.
pub async fn copy_table_csv<W: Write>(
    conn: &mut PgConnection,
    table: &TableRef,
    out: &mut W,
) -> Result<u64, DbError> {
    let statement = format!(
        "COPY {} TO STDOUT WITH (FORMAT csv, HEADER true)",
        table.qualified()
    );

    let mut stream = conn
        .copy_out_raw(&statement)
        .await
        .map_err(|source| DbError::CopyOut {
            table: table.to_string(),
            source,
        })?;

    let mut written = 0u64;
    while let Some(chunk) = stream
        .try_next()
        .await
        .map_err(|source| DbError::CopyOut {
            table: table.to_string(),
            source,
        })?
    {
        out.write_all(&chunk)?;
        written += chunk.len() as u64;
    }

    debug!(table = %table, bytes = written, "copied table to CSV");
    Ok(written)
}
