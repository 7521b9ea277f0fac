//! Google Sheets over HTTP.
//!
//! The spreadsheet is located by name through the Drive v3 `files.list`
//! endpoint, then the worksheet's formatted cell values are read in one
//! Sheets v4 `values.get` call.

use crate::credentials::{ApiResponse, CredentialProvider, SheetsClient};
use crate::error::{SheetError, SheetResult};
use crate::source::{records_from_rows, SpreadsheetSource};
use bjj_core::RawRecord;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;

const DRIVE_FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";
const SHEETS_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const SPREADSHEET_MIME_TYPE: &str = "application/vnd.google-apps.spreadsheet";

/// Reads worksheets from Google Sheets.
pub struct GoogleSheetsSource {
    credentials: Box<dyn CredentialProvider>,
}

#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

impl GoogleSheetsSource {
    pub fn new(credentials: Box<dyn CredentialProvider>) -> Self {
        Self { credentials }
    }

    fn spreadsheet_id(&self, client: &SheetsClient, name: &str) -> SheetResult<String> {
        let url = parse_url(DRIVE_FILES_URL)?;
        let query = drive_query(name);
        let response = client.get_json::<FileList>(
            url,
            &[
                ("q", query.as_str()),
                ("fields", "files(id,name)"),
                ("supportsAllDrives", "true"),
                ("includeItemsFromAllDrives", "true"),
            ],
        )?;

        let list = match response {
            ApiResponse::Success(list) => list,
            ApiResponse::Failure { status, body } => {
                return Err(api_failure(status, body, name, ""));
            }
        };
        if list.files.len() > 1 {
            log::debug!("{} spreadsheets named {name}; using the first", list.files.len());
        }
        list.files
            .into_iter()
            .find(|f| f.name == name)
            .map(|f| f.id)
            .ok_or_else(|| SheetError::SpreadsheetNotFound {
                name: name.to_string(),
            })
    }
}

impl SpreadsheetSource for GoogleSheetsSource {
    fn fetch(&self, spreadsheet: &str, worksheet: &str) -> SheetResult<Vec<RawRecord>> {
        let client = self.credentials.client()?;
        let id = self.spreadsheet_id(&client, spreadsheet)?;
        log::info!("Opened spreadsheet {spreadsheet}");

        let url = values_url(&id, worksheet)?;
        let response = client.get_json::<ValueRange>(
            url,
            &[
                ("majorDimension", "ROWS"),
                ("valueRenderOption", "FORMATTED_VALUE"),
            ],
        )?;

        let range = match response {
            ApiResponse::Success(range) => range,
            ApiResponse::Failure { status, body } => {
                return Err(values_failure(status, body, spreadsheet, worksheet));
            }
        };
        log::info!("Opened worksheet {worksheet}");
        Ok(records_from_values(range.values))
    }
}

fn parse_url(url: &str) -> SheetResult<Url> {
    Url::parse(url).map_err(|e| SheetError::SourceFetch {
        spreadsheet: String::new(),
        worksheet: String::new(),
        message: format!("invalid URL {url}: {e}"),
    })
}

/// Sheets answers an unknown sheet title with a 400 "Unable to parse range";
/// any other failure keeps its status and body.
fn values_failure(status: u16, body: String, spreadsheet: &str, worksheet: &str) -> SheetError {
    if status == 400 && body.contains("Unable to parse range") {
        return SheetError::WorksheetNotFound {
            spreadsheet: spreadsheet.to_string(),
            worksheet: worksheet.to_string(),
        };
    }
    api_failure(status, body, spreadsheet, worksheet)
}

fn api_failure(status: u16, body: String, spreadsheet: &str, worksheet: &str) -> SheetError {
    match status {
        401 | 403 => SheetError::Credentials {
            message: format!("Google API returned {status}: {body}"),
        },
        _ => SheetError::SourceFetch {
            spreadsheet: spreadsheet.to_string(),
            worksheet: worksheet.to_string(),
            message: format!("Google API returned {status}: {body}"),
        },
    }
}

/// Drive search expression matching a spreadsheet by exact name.
pub(crate) fn drive_query(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('\'', "\\'");
    format!("name = '{escaped}' and mimeType = '{SPREADSHEET_MIME_TYPE}' and trashed = false")
}

/// A1 range covering a whole sheet: the title in single quotes, inner
/// quotes doubled.
pub(crate) fn sheet_range(worksheet: &str) -> String {
    format!("'{}'", worksheet.replace('\'', "''"))
}

/// `values.get` URL for a whole worksheet, with the range percent-encoded
/// as a path segment.
pub(crate) fn values_url(spreadsheet_id: &str, worksheet: &str) -> SheetResult<Url> {
    let mut url = parse_url(SHEETS_URL)?;
    let range = sheet_range(worksheet);
    url.path_segments_mut()
        .map_err(|_| SheetError::SourceFetch {
            spreadsheet: spreadsheet_id.to_string(),
            worksheet: worksheet.to_string(),
            message: "base URL cannot take path segments".to_string(),
        })?
        .extend([spreadsheet_id, "values", range.as_str()]);
    Ok(url)
}

/// Convert a `values.get` grid into records, first row as header.
pub fn records_from_values(values: Vec<Vec<Value>>) -> Vec<RawRecord> {
    records_from_rows(
        values
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect::<Vec<String>>()),
    )
}

fn cell_text(cell: Value) -> String {
    match cell {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "google_test.rs"]
mod tests;
