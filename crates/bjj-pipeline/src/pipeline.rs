//! The orchestrator.
//!
//! Everything up to the final swap is read-only: a fetch, normalization or
//! resolution failure returns before the database is written.

use crate::error::{PipelineError, PipelineResult};
use bjj_core::record::{attach_class_ids, normalize_records};
use bjj_core::{FactTables, IngestedRecord, ReferenceKind, Schema};
use bjj_db::lookup::reference_ids;
use bjj_db::{replace_fact_tables, BjjDb, SyncReport};
use bjj_sheets::SpreadsheetSource;
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// Outcome of one successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    pub elapsed: Duration,
    /// Data rows read from the worksheet
    pub records: usize,
    pub sync: SyncReport,
}

/// One spreadsheet worksheet feeding one database.
pub struct Pipeline<S> {
    source: S,
    schema: Schema,
    spreadsheet: String,
    worksheet: String,
}

impl<S: SpreadsheetSource> Pipeline<S> {
    pub fn new(source: S, spreadsheet: impl Into<String>, worksheet: impl Into<String>) -> Self {
        Self {
            source,
            schema: Schema::bjj(),
            spreadsheet: spreadsheet.into(),
            worksheet: worksheet.into(),
        }
    }

    /// Use a different table layout.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Fetch and transform the worksheet into fact rows without writing.
    ///
    /// Returns the number of data rows read alongside the rows.
    pub fn prepare(&self, db: &BjjDb) -> PipelineResult<(usize, FactTables)> {
        let records = self.ingest(db)?;
        let conn = db.conn();
        let position_ids = reference_ids(conn, &self.schema, ReferenceKind::Position)?;
        let move_ids = reference_ids(conn, &self.schema, ReferenceKind::Move)?;
        let facts = FactTables::build(&records, &position_ids, &move_ids)?;
        Ok((records.len(), facts))
    }

    /// Fetch, normalize and attach class ids.
    fn ingest(&self, db: &BjjDb) -> PipelineResult<Vec<IngestedRecord>> {
        log::info!(
            "Fetching worksheet {} from spreadsheet {}",
            self.worksheet,
            self.spreadsheet
        );
        let raw = self.source.fetch(&self.spreadsheet, &self.worksheet)?;
        if raw.is_empty() {
            return Err(PipelineError::EmptySource {
                spreadsheet: self.spreadsheet.clone(),
                worksheet: self.worksheet.clone(),
            });
        }
        log::info!("Fetched {} records", raw.len());

        let normalized = normalize_records(&raw)?;
        let class_ids = reference_ids(db.conn(), &self.schema, ReferenceKind::Class)?;
        Ok(attach_class_ids(normalized, &class_ids)?)
    }

    /// Run one full ingestion cycle.
    ///
    /// Either every fact table is replaced or none is.
    pub fn run(&self, db: &BjjDb) -> PipelineResult<RunSummary> {
        let started_at = Local::now();
        let timer = Instant::now();
        log::info!("Pipeline started at {}", started_at.format("%Y-%m-%d %H:%M:%S"));

        let result = self.prepare(db).and_then(|(records, facts)| {
            let sync = replace_fact_tables(db, &self.schema, &facts)?;
            Ok((records, sync))
        });

        let finished_at = Local::now();
        let elapsed = timer.elapsed();
        log::info!("Pipeline ended at {}", finished_at.format("%Y-%m-%d %H:%M:%S"));
        log::info!("Pipeline took {:.3}s", elapsed.as_secs_f64());

        let (records, sync) = result?;
        Ok(RunSummary {
            started_at,
            finished_at,
            elapsed,
            records,
            sync,
        })
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
