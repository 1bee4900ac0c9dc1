//! Zip archive construction for table exports.
//!
//! One archive per run, one deflate-compressed CSV member per audit
//! table. The export loop is strictly sequential and keeps at most one
//! intermediate CSV on disk at a time.

pub mod export;
pub mod writer;

pub use export::export_to_archive;
pub use writer::{archive_file_name, ArchiveError, ArchiveSummary, ArchiveWriter};
