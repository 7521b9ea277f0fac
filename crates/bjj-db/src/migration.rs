//! Schema migration runner.
//!
//! Tracks applied migration versions in `bjj_schema_version` and runs any
//! unapplied migrations on each open.

use crate::ddl::MIGRATIONS;
use crate::error::{DbError, DbResult};
use rusqlite::Connection;

/// Ensure the `bjj_schema_version` table exists.
fn ensure_version_table(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS bjj_schema_version (
             version    INTEGER NOT NULL,
             applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
         );",
    )
    .map_err(|e| DbError::MigrationError(format!("failed to create version table: {e}")))?;
    Ok(())
}

/// Highest applied migration version, or 0 if none.
pub fn current_version(conn: &Connection) -> DbResult<i32> {
    let version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM bjj_schema_version",
            [],
            |row| row.get(0),
        )
        .map_err(|e| DbError::MigrationError(format!("failed to read schema version: {e}")))?;
    Ok(version)
}

/// Run all unapplied migrations against `conn`.
///
/// Each migration and its version row commit together, so a failed seed
/// never leaves a half-populated reference table behind.
pub fn run_migrations(conn: &Connection) -> DbResult<()> {
    ensure_version_table(conn)?;
    let current = current_version(conn)?;

    for migration in MIGRATIONS {
        if migration.version <= current {
            continue;
        }
        log::debug!("Applying migration v{:03}", migration.version);

        let tx = conn.unchecked_transaction().map_err(|e| {
            DbError::MigrationError(format!("migration v{:03}: BEGIN failed: {e}", migration.version))
        })?;
        tx.execute_batch(migration.sql).map_err(|e| {
            DbError::MigrationError(format!("migration v{:03} failed: {e}", migration.version))
        })?;
        tx.execute(
            "INSERT INTO bjj_schema_version (version) VALUES (?1)",
            [migration.version],
        )
        .map_err(|e| {
            DbError::MigrationError(format!(
                "failed to record migration v{:03}: {e}",
                migration.version
            ))
        })?;
        tx.commit().map_err(|e| {
            DbError::MigrationError(format!("migration v{:03}: COMMIT failed: {e}", migration.version))
        })?;
    }
    Ok(())
}
