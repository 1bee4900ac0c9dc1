//! The per-table export loop.

use crate::writer::{ArchiveError, ArchiveSummary, ArchiveWriter};
use auditpack_database::{copy_table_csv, TableRef};
use chrono::Local;
use sqlx::postgres::PgConnection;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Export every table into a fresh archive in `dir`.
///
/// Tables are processed strictly sequentially. Each one is streamed via
/// `COPY` into an intermediate CSV next to the archive, added as a member
/// named `<schema>.<table>.csv`, and the CSV is deleted before the next
/// table starts, so local disk holds at most one table's worth of CSV.
///
/// Any failure propagates immediately; the partly written archive (and
/// the CSV being processed at the time) may be left behind in `dir`.
pub async fn export_to_archive(
    conn: &mut PgConnection,
    tables: &[TableRef],
    dir: &Path,
) -> Result<ArchiveSummary, ArchiveError> {
    let mut archive = ArchiveWriter::create(dir, Local::now())?;
    info!(path = %archive.path().display(), "created backup archive");

    for table in tables {
        let member = table.member_name();
        let csv_path = dir.join(&member);

        let mut out = BufWriter::new(File::create(&csv_path)?);
        let bytes = copy_table_csv(conn, table, &mut out).await?;
        out.flush()?;
        drop(out);

        archive.add_file(&member, &csv_path)?;
        fs::remove_file(&csv_path)?;
        info!(table = %table, bytes, "archived table");
    }

    archive.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Read;
    use tempfile::tempdir;

    // The copy-out half needs a live server (covered by the ignored tests
    // in auditpack-database); here we drive the same member lifecycle the
    // loop performs, against files on disk.
    #[test]
    fn test_member_lifecycle_leaves_no_csv_behind() {
        let dir = tempdir().unwrap();
        let stamp = Local.with_ymd_and_hms(2024, 3, 9, 14, 30, 5).unwrap();
        let tables = [
            TableRef {
                schema: "public".to_string(),
                name: "audit_trail".to_string(),
            },
            TableRef {
                schema: "public".to_string(),
                name: "user_audit_log".to_string(),
            },
        ];
        let fixtures = ["id,actor\n1,alice\n2,bob\n", "id,detail\n"];

        let mut archive = ArchiveWriter::create(dir.path(), stamp).unwrap();
        for (table, fixture) in tables.iter().zip(fixtures) {
            let member = table.member_name();
            let csv_path = dir.path().join(&member);
            fs::write(&csv_path, fixture).unwrap();

            archive.add_file(&member, &csv_path).unwrap();
            fs::remove_file(&csv_path).unwrap();
        }
        let summary = archive.finish().unwrap();

        assert_eq!(summary.members, 2);

        // Only the archive itself remains in the directory.
        let remaining: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(remaining, vec!["audit_backup_20240309_143005.zip"]);

        // Each member holds exactly its source rows.
        let mut zip = zip::ZipArchive::new(File::open(&summary.path).unwrap()).unwrap();
        let mut trail = String::new();
        zip.by_name("public.audit_trail.csv")
            .unwrap()
            .read_to_string(&mut trail)
            .unwrap();
        assert_eq!(trail.lines().count(), 3, "header plus two rows");

        let mut empty = String::new();
        zip.by_name("public.user_audit_log.csv")
            .unwrap()
            .read_to_string(&mut empty)
            .unwrap();
        assert_eq!(empty.lines().count(), 1, "header only");
    }
}
