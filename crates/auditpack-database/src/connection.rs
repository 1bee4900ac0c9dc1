//! Connection establishment.

use crate::error::DbError;
use auditpack_config::DbConfig;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::{debug, instrument};

/// Open a single connection to PostgreSQL.
///
/// One blocking attempt with the driver's default timeout; an unreachable
/// host, bad credentials, or a missing database all surface as
/// [`DbError::Connect`] and end the run.
#[instrument(skip(config), fields(host = %config.host, database = %config.database))]
pub async fn connect(config: &DbConfig) -> Result<PgConnection, DbError> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.database)
        .username(&config.user)
        .password(&config.password)
        .disable_statement_logging();

    let conn = PgConnection::connect_with(&options)
        .await
        .map_err(|source| DbError::Connect {
            host: config.host.clone(),
            port: config.port,
            database: config.database.clone(),
            source,
        })?;

    debug!("connected");
    Ok(conn)
}
