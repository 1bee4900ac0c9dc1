//! CLI error handling and exit codes.

use std::process::ExitCode;

use auditpack_archive::ArchiveError;
use auditpack_config::ConfigError;
use auditpack_database::DbError;
use auditpack_storage::StorageError;
use thiserror::Error;

/// Application exit codes
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success = 0,
    GeneralError = 1,
    ConfigError = 2,
    DbError = 3,
    ExportError = 4,
    UploadError = 5,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

/// Top-level error: every pipeline failure funnels through here to pick
/// its exit code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Exit code for this error.
    ///
    /// Absent storage settings count as configuration problems; only a
    /// failed transfer is an upload error.
    pub fn exit_code(&self) -> Exit {
        match self {
            CliError::Config(_) => Exit::ConfigError,
            CliError::Db(_) => Exit::DbError,
            CliError::Archive(_) => Exit::ExportError,
            CliError::Storage(StorageError::MissingBucket | StorageError::MissingEnvironment) => {
                Exit::ConfigError
            }
            CliError::Storage(_) => Exit::UploadError,
            CliError::Output(_) => Exit::GeneralError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_failure_has_its_own_exit_code() {
        let err = CliError::Storage(StorageError::Upload {
            key: "staging/audit_backup_20240309_143005.zip".to_string(),
            message: "access denied".to_string(),
        });
        assert_eq!(err.exit_code(), Exit::UploadError);
    }

    #[test]
    fn test_missing_storage_settings_are_config_errors() {
        assert_eq!(
            CliError::Storage(StorageError::MissingBucket).exit_code(),
            Exit::ConfigError
        );
        assert_eq!(
            CliError::Storage(StorageError::MissingEnvironment).exit_code(),
            Exit::ConfigError
        );
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [
            Exit::Success,
            Exit::GeneralError,
            Exit::ConfigError,
            Exit::DbError,
            Exit::ExportError,
            Exit::UploadError,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(*a as u8, *b as u8);
            }
        }
    }
}
