//! Spreadsheet sources for bjj-journey.
//!
//! A [`SpreadsheetSource`] turns a named spreadsheet and worksheet into
//! [`bjj_core::RawRecord`]s. Two sources are provided: CSV files exported
//! from the spreadsheet, and Google Sheets read over HTTP with credentials
//! supplied by a [`CredentialProvider`].

pub mod credentials;
pub mod csv_export;
pub mod error;
pub mod google;
pub mod source;

pub use credentials::{
    ApiResponse, AuthorizedUserCredentials, CredentialProvider, EnvironmentCredentials,
    SheetsClient,
};
pub use csv_export::CsvExportSource;
pub use error::{SheetError, SheetResult};
pub use google::GoogleSheetsSource;
pub use source::{source_from_config, SpreadsheetSource};
