//! The full backup pipeline.

use std::path::PathBuf;

use clap::{Args, ValueHint};
use sqlx::postgres::PgConnection;
use sqlx::Connection;
use tracing::{info, warn};

use crate::error::CliError;
use auditpack_archive::export_to_archive;
use auditpack_config::Config;
use auditpack_database::{connect, discover_audit_tables};
use auditpack_storage::{upload_archive, S3Store};

/// `auditpack run` - one backup run for one environment.
#[derive(Debug, Args)]
pub struct RunCommand {
    /// Directory for the archive and intermediate CSVs
    #[arg(
        long,
        value_hint = ValueHint::DirPath,
        help = "Directory for the archive and intermediate CSVs (defaults to the system temp dir)"
    )]
    pub output_dir: Option<PathBuf>,
}

impl RunCommand {
    /// Connect, run the pipeline, and close the connection on every exit
    /// path before the pipeline's outcome propagates.
    pub async fn execute(self, config: Config) -> Result<(), CliError> {
        let mut conn = connect(&config.db).await?;

        let result = self.pipeline(&mut conn, &config).await;

        if let Err(e) = conn.close().await {
            warn!("failed to close database connection: {e}");
        }
        result
    }

    /// connect → discover → (early exit) → export/archive → upload.
    async fn pipeline(&self, conn: &mut PgConnection, config: &Config) -> Result<(), CliError> {
        let tables = discover_audit_tables(conn).await?;
        if tables.is_empty() {
            warn!("no audit tables found; nothing to back up");
            return Ok(());
        }
        info!(count = tables.len(), "discovered audit tables");

        let dir = self
            .output_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir);
        let summary = export_to_archive(conn, &tables, &dir).await?;
        info!(
            path = %summary.path.display(),
            members = summary.members,
            bytes = summary.bytes,
            "archive written"
        );

        let store = S3Store::from_config(&config.storage).await?;
        let key = upload_archive(&store, &config.storage, &summary.path).await?;
        info!(bucket = store.bucket(), %key, "uploaded archive");

        Ok(())
    }
}
