//! Archive file handling.

use auditpack_database::DbError;
use chrono::{DateTime, Local};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Archive errors.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Db(#[from] DbError),
}

/// What one completed run produced.
#[derive(Debug, Clone)]
pub struct ArchiveSummary {
    /// Local path of the finished archive.
    pub path: PathBuf,
    /// Number of CSV members.
    pub members: u64,
    /// Total uncompressed bytes across all members.
    pub bytes: u64,
}

/// Archive filename for a run started at `stamp`, local time.
pub fn archive_file_name(stamp: DateTime<Local>) -> String {
    format!("audit_backup_{}.zip", stamp.format("%Y%m%d_%H%M%S"))
}

/// Incremental writer for the run's single zip archive.
///
/// Members are added one at a time from files on disk; the archive is not
/// valid until [`finish`](Self::finish) runs. On a mid-run failure a
/// partially written file may remain at [`path`](Self::path).
pub struct ArchiveWriter {
    zip: ZipWriter<File>,
    path: PathBuf,
    members: u64,
    bytes: u64,
}

impl ArchiveWriter {
    /// Create an empty archive in `dir`, named after `stamp`.
    pub fn create(dir: &Path, stamp: DateTime<Local>) -> Result<Self, ArchiveError> {
        let path = dir.join(archive_file_name(stamp));
        let file = File::create(&path)?;
        Ok(Self {
            zip: ZipWriter::new(file),
            path,
            members: 0,
            bytes: 0,
        })
    }

    /// Local path of the archive being written.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add one file as a deflate-compressed member named `member_name`.
    /// Returns the member's uncompressed size.
    pub fn add_file(&mut self, member_name: &str, src: &Path) -> Result<u64, ArchiveError> {
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        self.zip.start_file(member_name, options)?;

        let mut src_file = File::open(src)?;
        let copied = io::copy(&mut src_file, &mut self.zip)?;

        self.members += 1;
        self.bytes += copied;
        Ok(copied)
    }

    /// Write the central directory and close the archive.
    pub fn finish(self) -> Result<ArchiveSummary, ArchiveError> {
        let Self {
            zip,
            path,
            members,
            bytes,
        } = self;
        zip.finish()?;
        Ok(ArchiveSummary {
            path,
            members,
            bytes,
        })
    }
}
