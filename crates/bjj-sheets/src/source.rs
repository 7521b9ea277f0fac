//! The spreadsheet source seam.

use crate::credentials::provider_from_config;
use crate::csv_export::CsvExportSource;
use crate::error::SheetResult;
use crate::google::GoogleSheetsSource;
use bjj_core::config::SourceConfig;
use bjj_core::{RawRecord, SourceKind};

/// Anything that can produce the rows of a worksheet.
pub trait SpreadsheetSource {
    /// Fetch every data row of `worksheet` in `spreadsheet`.
    ///
    /// The first row of the worksheet is the header; each record pairs
    /// header cells with row cells, blanks as `""`.
    fn fetch(&self, spreadsheet: &str, worksheet: &str) -> SheetResult<Vec<RawRecord>>;
}

impl<S: SpreadsheetSource + ?Sized> SpreadsheetSource for Box<S> {
    fn fetch(&self, spreadsheet: &str, worksheet: &str) -> SheetResult<Vec<RawRecord>> {
        (**self).fetch(spreadsheet, worksheet)
    }
}

/// Build the source selected by the configuration.
pub fn source_from_config(config: &SourceConfig) -> Box<dyn SpreadsheetSource> {
    match config.kind {
        SourceKind::Csv => Box::new(CsvExportSource::new(config.export_dir.clone())),
        SourceKind::GoogleSheets => Box::new(GoogleSheetsSource::new(provider_from_config(
            &config.credentials,
        ))),
    }
}

/// Pair a header row with every following row.
///
/// Short rows are padded with `""`, cells past the header are dropped, and
/// rows with nothing but blanks are skipped.
pub fn records_from_rows<I>(rows: I) -> Vec<RawRecord>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut rows = rows.into_iter();
    let Some(header) = rows.next() else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for row in rows {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut cells = row.into_iter();
        let fields = header
            .iter()
            .map(|column| (column.clone(), cells.next().unwrap_or_default()))
            .collect();
        records.push(RawRecord::new(fields));
    }
    log::debug!("Read {} records under {} columns", records.len(), header.len());
    records
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
