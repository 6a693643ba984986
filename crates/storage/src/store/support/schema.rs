#![forbid(unsafe_code)]

use super::super::StoreError;
use rusqlite::{Connection, params};

const SCHEMA_VERSION: &str = "v1";

pub(in crate::store) fn install_schema(conn: &Connection) -> Result<(), StoreError> {
    let journal_mode =
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))?;
    tracing::debug!(journal_mode = %journal_mode, "catalog journal mode");

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS meta (
          key TEXT PRIMARY KEY,
          value TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS catalog (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          parent TEXT NOT NULL,
          name TEXT NOT NULL,
          metadata TEXT NOT NULL,
          created_at_ms INTEGER NOT NULL,
          deleted_at_ms INTEGER
        );

        CREATE INDEX IF NOT EXISTS catalog_parent_name_idx ON catalog(parent, name, id);
        CREATE INDEX IF NOT EXISTS catalog_created_at_idx ON catalog(created_at_ms);
        "#,
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO meta(key, value) VALUES (?1, ?2)",
        params!["schema_version", SCHEMA_VERSION],
    )?;

    Ok(())
}
