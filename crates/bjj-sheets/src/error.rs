//! Error types for spreadsheet sources.

use thiserror::Error;

/// Spreadsheet source errors. All of them occur before the database is
/// touched.
#[derive(Error, Debug)]
pub enum SheetError {
    /// The source could not produce records (S001)
    #[error("[S001] Failed to fetch '{worksheet}' from '{spreadsheet}': {message}")]
    SourceFetch {
        spreadsheet: String,
        worksheet: String,
        message: String,
    },

    /// No spreadsheet with this name (S002)
    #[error("[S002] Spreadsheet not found: {name}")]
    SpreadsheetNotFound { name: String },

    /// The spreadsheet has no worksheet with this name (S003)
    #[error("[S003] Worksheet '{worksheet}' not found in spreadsheet '{spreadsheet}'")]
    WorksheetNotFound {
        spreadsheet: String,
        worksheet: String,
    },

    /// Credentials missing or rejected (S004)
    #[error("[S004] Credentials error: {message}")]
    Credentials { message: String },

    /// HTTP transport error (S005)
    #[error("[S005] HTTP request failed")]
    Http(#[source] reqwest::Error),

    /// CSV export could not be parsed (S006)
    #[error("[S006] Invalid CSV export {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// IO error with file path context (S007)
    #[error("[S007] IO error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for [`SheetError`]
pub type SheetResult<T> = Result<T, SheetError>;

impl From<reqwest::Error> for SheetError {
    fn from(err: reqwest::Error) -> Self {
        SheetError::Http(err)
    }
}
