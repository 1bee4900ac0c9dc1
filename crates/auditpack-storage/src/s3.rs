//! S3-backed object store.

use crate::store::{ObjectStore, StorageError};
use async_trait::async_trait;
use auditpack_config::StorageConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use std::path::Path;
use tracing::debug;

/// S3 client bound to one destination bucket.
#[derive(Debug)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    /// Build a store from the run's storage configuration.
    ///
    /// Requires the bucket to be set. Credentials come from the SDK's
    /// default provider chain; the region comes from `S3_REGION` when set
    /// and otherwise from the same chain.
    pub async fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        let bucket = config
            .bucket
            .clone()
            .ok_or(StorageError::MissingBucket)?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        debug!(%bucket, "S3 client ready");
        Ok(Self {
            client: Client::new(&sdk_config),
            bucket,
        })
    }

    /// Destination bucket name.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_file(&self, local: &Path, key: &str) -> Result<(), StorageError> {
        let body = ByteStream::from_path(local)
            .await
            .map_err(|e| StorageError::ReadArchive {
                path: local.to_path_buf(),
                message: e.to_string(),
            })?;

        // Single put; the SDK handles sizing internally.
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|e| StorageError::Upload {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }
}
