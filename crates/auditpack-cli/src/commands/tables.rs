//! Discovery-only listing.

use clap::Args;
use sqlx::Connection;
use tracing::warn;

use crate::error::CliError;
use auditpack_config::Config;
use auditpack_database::{connect, discover_audit_tables};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// `auditpack tables` - show what a run would back up.
#[derive(Debug, Args)]
pub struct TablesCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl TablesCommand {
    pub async fn execute(self, config: Config) -> Result<(), CliError> {
        let mut conn = connect(&config.db).await?;

        let result = discover_audit_tables(&mut conn).await;

        if let Err(e) = conn.close().await {
            warn!("failed to close database connection: {e}");
        }
        let tables = result?;

        match self.format {
            OutputFormat::Text => {
                for table in &tables {
                    println!("{table}");
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&tables)?);
            }
        }
        Ok(())
    }
}
