//! Error types for the ingestion pipeline.

use bjj_core::CoreError;
use bjj_db::DbError;
use bjj_sheets::SheetError;
use thiserror::Error;

/// Any failure that aborts a pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The worksheet has a header but no data rows (P001)
    #[error("[P001] Worksheet '{worksheet}' in '{spreadsheet}' has no records; refusing to clear the fact tables")]
    EmptySource {
        spreadsheet: String,
        worksheet: String,
    },

    /// Validation or resolution failure
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Store failure, including a rolled-back sync
    #[error(transparent)]
    Db(#[from] DbError),

    /// Spreadsheet fetch failure
    #[error(transparent)]
    Source(#[from] SheetError),
}

/// Result type alias for [`PipelineError`]
pub type PipelineResult<T> = Result<T, PipelineError>;
