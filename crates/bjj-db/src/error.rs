//! Error types for the bjj database.

use bjj_core::CoreError;
use thiserror::Error;

/// Database errors.
#[derive(Error, Debug)]
pub enum DbError {
    /// Failed to open or create the database (D001).
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Schema migration failed (D002).
    #[error("[D002] Database migration failed: {0}")]
    MigrationError(String),

    /// SQL execution error (D003).
    #[error("[D003] Database query failed: {0}")]
    QueryError(String),

    /// BEGIN / COMMIT failed (D004).
    #[error("[D004] Database transaction failed: {0}")]
    TransactionError(String),

    /// A step of the fact table swap failed; the transaction was rolled back (D005).
    #[error("[D005] Sync of '{table}' failed during {step}: {message}")]
    SyncFailure {
        table: String,
        step: &'static str,
        message: String,
    },

    /// Validation or resolution error raised while reading the store.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// SQLite driver error with preserved source chain (D006).
    #[error("[D006] SQLite error")]
    Sqlite(#[source] rusqlite::Error),
}

/// Result type alias for [`DbError`].
pub type DbResult<T> = Result<T, DbError>;

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        DbError::Sqlite(err)
    }
}
