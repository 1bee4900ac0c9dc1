//! Discovery and copy-out tests against a live PostgreSQL instance.
//!
//! These need a reachable server configured through the usual `DB_*`
//! variables (or the documented localhost defaults):
//!
//! ```text
//! cargo test -p auditpack-database -- --ignored
//! ```

use auditpack_config::DbConfig;
use auditpack_database::{connect, copy_table_csv, discover_audit_tables, TableRef};
use sqlx::postgres::PgConnection;
use sqlx::{Connection, Executor};

async fn test_connection() -> PgConnection {
    let config = DbConfig::from_env().expect("invalid DB_* environment");
    connect(&config).await.expect("database not reachable")
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn discovery_matches_case_insensitively_and_skips_views() {
    let mut conn = test_connection().await;

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS "AUDIT_LOG_PROBE" (id BIGINT);
        CREATE TABLE IF NOT EXISTS audits_2024_probe (id BIGINT);
        CREATE TABLE IF NOT EXISTS orders_probe (id BIGINT);
        CREATE OR REPLACE VIEW audit_views_probe AS SELECT 1 AS one;
        "#,
    )
    .await
    .expect("fixture DDL failed");

    let tables = discover_audit_tables(&mut conn).await.unwrap();
    let names: Vec<&str> = tables.iter().map(|t| t.name.as_str()).collect();

    assert!(names.contains(&"AUDIT_LOG_PROBE"));
    assert!(names.contains(&"audits_2024_probe"));
    assert!(!names.contains(&"orders_probe"));
    assert!(!names.contains(&"audit_views_probe"));

    conn.execute(
        r#"
        DROP VIEW IF EXISTS audit_views_probe;
        DROP TABLE IF EXISTS "AUDIT_LOG_PROBE";
        DROP TABLE IF EXISTS audits_2024_probe;
        DROP TABLE IF EXISTS orders_probe;
        "#,
    )
    .await
    .unwrap();
    conn.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn copy_out_emits_header_and_all_rows() {
    let mut conn = test_connection().await;

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS audit_copy_probe (id BIGINT, actor TEXT);
        TRUNCATE audit_copy_probe;
        INSERT INTO audit_copy_probe VALUES (1, 'alice'), (2, 'bob');
        "#,
    )
    .await
    .expect("fixture DDL failed");

    let table = TableRef {
        schema: "public".to_string(),
        name: "audit_copy_probe".to_string(),
    };
    let mut csv = Vec::new();
    let bytes = copy_table_csv(&mut conn, &table, &mut csv).await.unwrap();

    assert_eq!(bytes, csv.len() as u64);
    let text = String::from_utf8(csv).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3, "header plus two data rows");
    assert_eq!(lines[0], "id,actor");
    assert!(lines.contains(&"1,alice"));
    assert!(lines.contains(&"2,bob"));

    conn.execute("DROP TABLE IF EXISTS audit_copy_probe")
        .await
        .unwrap();
    conn.close().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn copy_out_of_empty_table_is_header_only() {
    let mut conn = test_connection().await;

    conn.execute("CREATE TABLE IF NOT EXISTS user_audit_empty_probe (id BIGINT, detail TEXT)")
        .await
        .expect("fixture DDL failed");
    conn.execute("TRUNCATE user_audit_empty_probe").await.unwrap();

    let table = TableRef {
        schema: "public".to_string(),
        name: "user_audit_empty_probe".to_string(),
    };
    let mut csv = Vec::new();
    copy_table_csv(&mut conn, &table, &mut csv).await.unwrap();

    let text = String::from_utf8(csv).unwrap();
    assert_eq!(text.lines().count(), 1, "header only");

    conn.execute("DROP TABLE IF EXISTS user_audit_empty_probe")
        .await
        .unwrap();
    conn.close().await.unwrap();
}
