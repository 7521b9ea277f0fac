//! Database connection wrapper.
//!
//! [`BjjDb`] owns a SQLite [`Connection`] and provides helpers for opening,
//! migrating, and transacting against the bjj database.

use crate::error::{DbError, DbResult};
use crate::migration::{current_version, run_migrations};
use rusqlite::Connection;
use std::path::Path;

/// Path value that selects an in-memory database.
pub const MEMORY_PATH: &str = ":memory:";

/// Wrapper around a SQLite connection with foreign keys enforced.
///
/// Single-threaded; one pipeline run owns the connection.
pub struct BjjDb {
    conn: Connection,
}

impl BjjDb {
    /// Open (or create) the database at `path` and run pending migrations.
    ///
    /// A path of `:memory:` opens an in-memory database.
    pub fn open(path: &Path) -> DbResult<Self> {
        if path.as_os_str() == MEMORY_PATH {
            return Self::open_memory();
        }
        let conn = Connection::open(path)
            .map_err(|e| DbError::ConnectionError(format!("{e}: {}", path.display())))?;
        log::debug!("Opened database at {}", path.display());
        Self::init(conn)
    }

    /// Create an in-memory database with all migrations applied.
    pub fn open_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> DbResult<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| DbError::ConnectionError(format!("failed to enable foreign keys: {e}")))?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Borrow the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Highest applied migration version.
    pub fn schema_version(&self) -> DbResult<i32> {
        current_version(&self.conn)
    }

    /// Execute `body` within a `BEGIN IMMEDIATE` / `COMMIT` transaction,
    /// rolling back on error.
    ///
    /// `IMMEDIATE` takes the write lock up front, so readers keep seeing the
    /// last committed snapshot until `COMMIT`.
    pub fn transaction<F, T>(&self, body: F) -> DbResult<T>
    where
        F: FnOnce(&Connection) -> DbResult<T>,
    {
        self.conn
            .execute_batch("BEGIN IMMEDIATE")
            .map_err(|e| DbError::TransactionError(format!("BEGIN failed: {e}")))?;

        let result = body(&self.conn);

        match &result {
            Ok(_) => {
                if let Err(commit_err) = self.conn.execute_batch("COMMIT") {
                    let _ = self.conn.execute_batch("ROLLBACK");
                    return Err(DbError::TransactionError(format!(
                        "COMMIT failed: {commit_err}"
                    )));
                }
            }
            Err(_) => {
                if let Err(rollback_err) = self.conn.execute_batch("ROLLBACK") {
                    log::warn!("ROLLBACK failed: {rollback_err}");
                }
            }
        }
        result
    }
}

#[cfg(test)]
#[path = "connection_test.rs"]
mod tests;
