//! CLI argument definitions using clap derive macros.

use clap::{ArgAction, Parser, Subcommand};

use crate::commands::{RunCommand, TablesCommand};
use crate::error::CliError;
use auditpack_config::Config;

/// auditpack - back up audit tables to object storage
///
/// Connects to PostgreSQL, exports every base table whose name contains
/// "audit" as CSV, bundles the CSVs into one zip archive, and uploads the
/// archive to S3 under the deployment environment's prefix.
#[derive(Debug, Parser)]
#[command(
    name = "auditpack",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity level"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full backup pipeline: discover, export, archive, upload
    Run(RunCommand),

    /// List the audit tables the run would back up, without exporting
    Tables(TablesCommand),
}

impl Cli {
    /// Execute the selected command.
    pub async fn execute(self, config: Config) -> Result<(), CliError> {
        match self.command {
            Command::Run(cmd) => cmd.execute(config).await,
            Command::Tables(cmd) => cmd.execute(config).await,
        }
    }
}
