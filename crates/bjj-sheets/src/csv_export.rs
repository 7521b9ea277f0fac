//! CSV exports of the spreadsheet on local disk.

use crate::error::{SheetError, SheetResult};
use crate::source::{records_from_rows, SpreadsheetSource};
use bjj_core::RawRecord;
use std::path::{Path, PathBuf};

/// Reads `<export_dir>/<spreadsheet>/<worksheet>.csv`.
#[derive(Debug, Clone)]
pub struct CsvExportSource {
    export_dir: PathBuf,
}

impl CsvExportSource {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }

    /// Path of the export for one worksheet.
    pub fn worksheet_path(&self, spreadsheet: &str, worksheet: &str) -> PathBuf {
        self.export_dir
            .join(spreadsheet)
            .join(format!("{worksheet}.csv"))
    }
}

impl SpreadsheetSource for CsvExportSource {
    fn fetch(&self, spreadsheet: &str, worksheet: &str) -> SheetResult<Vec<RawRecord>> {
        let spreadsheet_dir = self.export_dir.join(spreadsheet);
        if !spreadsheet_dir.is_dir() {
            return Err(SheetError::SpreadsheetNotFound {
                name: spreadsheet.to_string(),
            });
        }
        let path = self.worksheet_path(spreadsheet, worksheet);
        if !path.is_file() {
            return Err(SheetError::WorksheetNotFound {
                spreadsheet: spreadsheet.to_string(),
                worksheet: worksheet.to_string(),
            });
        }

        log::info!("Opened worksheet {worksheet} in {spreadsheet}");
        read_rows(&path).map(records_from_rows)
    }
}

fn read_rows(path: &Path) -> SheetResult<Vec<Vec<String>>> {
    let csv_error = |source: csv::Error| SheetError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

#[cfg(test)]
#[path = "csv_export_test.rs"]
mod tests;
