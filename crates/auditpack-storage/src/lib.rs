//! Object storage upload for backup archives.
//!
//! A small provider seam ([`ObjectStore`]) with one real implementation
//! backed by S3 and a mock for tests. Uploads are fatal on failure; the
//! caller decides nothing beyond the key, which is always
//! `<environment>/<archive file name>`.

pub mod s3;
pub mod store;

pub use s3::S3Store;
pub use store::{object_key, upload_archive, MockObjectStore, ObjectStore, StorageError};
