//! Ingest command implementation

use anyhow::{Context, Result};
use bjj_pipeline::Pipeline;
use bjj_sheets::source_from_config;

use crate::cli::{GlobalArgs, IngestArgs};
use crate::commands::common::{apply_ingest_overrides, load_config, open_database};

/// Execute the ingest command
pub(crate) fn execute(args: &IngestArgs, global: &GlobalArgs) -> Result<()> {
    let mut config = load_config(global)?;
    apply_ingest_overrides(&mut config, args)?;
    let db = open_database(&config)?;

    let source = source_from_config(&config.source);
    let pipeline = Pipeline::new(
        source,
        config.source.spreadsheet.as_str(),
        config.source.worksheet.as_str(),
    );
    let summary = pipeline.run(&db).with_context(|| {
        format!(
            "Ingest of '{}' / '{}' failed; the database was left unchanged",
            config.source.spreadsheet, config.source.worksheet
        )
    })?;

    println!(
        "Ingested {} records from '{}' in {:.2}s",
        summary.records,
        config.source.worksheet,
        summary.elapsed.as_secs_f64()
    );
    for change in &summary.sync.tables {
        println!(
            "  {:<22} {:>6} deleted {:>6} inserted",
            change.table, change.deleted, change.inserted
        );
    }
    Ok(())
}
