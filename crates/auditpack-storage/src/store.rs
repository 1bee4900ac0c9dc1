//! The storage provider seam.

use async_trait::async_trait;
use auditpack_config::StorageConfig;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::info;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("S3_BUCKET_NAME is not set")]
    MissingBucket,

    #[error("env (deployment environment tag) is not set")]
    MissingEnvironment,

    #[error("failed to read archive {path}: {message}")]
    ReadArchive { path: PathBuf, message: String },

    #[error("upload of {key} failed: {message}")]
    Upload { key: String, message: String },
}

/// A destination that can receive one local file under a key.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload `local` as a single object under `key`.
    async fn put_file(&self, local: &Path, key: &str) -> Result<(), StorageError>;
}

/// Object key for an archive: the environment tag as prefix, then the
/// archive's base name. The rest of the local path never reaches the
/// remote key.
pub fn object_key(environment: &str, archive_path: &Path) -> String {
    let file_name = archive_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{environment}/{file_name}")
}

/// Upload a finished archive.
///
/// Validates that the environment tag is configured, computes the key,
/// and hands the file to the store. Errors propagate; an upload failure
/// fails the run.
pub async fn upload_archive(
    store: &dyn ObjectStore,
    config: &StorageConfig,
    archive_path: &Path,
) -> Result<String, StorageError> {
    let environment = config
        .environment
        .as_deref()
        .ok_or(StorageError::MissingEnvironment)?;

    let key = object_key(environment, archive_path);
    info!(path = %archive_path.display(), %key, "uploading archive");
    store.put_file(archive_path, &key).await?;
    Ok(key)
}

/// In-memory store for tests: records every put, optionally fails.
#[derive(Debug, Default)]
pub struct MockObjectStore {
    /// When set, every put fails with this message.
    pub fail_with: Option<String>,
    /// Successful puts, in order.
    pub puts: Mutex<Vec<(PathBuf, String)>>,
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn put_file(&self, local: &Path, key: &str) -> Result<(), StorageError> {
        if let Some(message) = &self.fail_with {
            return Err(StorageError::Upload {
                key: key.to_string(),
                message: message.clone(),
            });
        }
        self.puts
            .lock()
            .unwrap()
            .push((local.to_path_buf(), key.to_string()));
        Ok(())
    }
}
