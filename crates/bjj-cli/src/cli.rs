//! CLI argument definitions using clap derive API

use bjj_core::{DashboardView, SourceKind};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// bjj - track your Brazilian Jiu-Jitsu training
#[derive(Parser, Debug)]
#[command(name = "bjj")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config file (default: bjj.yml in the current directory, if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database path, or :memory:
    #[arg(short, long, global = true, env = "BJJ_DB_PATH")]
    pub database: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the attendance worksheet into the fact tables
    Ingest(IngestArgs),

    /// Create or upgrade the database schema
    Migrate,

    /// Print dashboard metrics
    Metrics(MetricsArgs),
}

/// Arguments for the ingest command
#[derive(Args, Debug, Default)]
pub struct IngestArgs {
    /// Where to read the worksheet from
    #[arg(short, long, value_enum)]
    pub source: Option<SourceArg>,

    /// Directory of CSV exports (csv source)
    #[arg(short, long)]
    pub export_dir: Option<PathBuf>,

    /// Spreadsheet name
    #[arg(long)]
    pub spreadsheet: Option<String>,

    /// Worksheet name
    #[arg(short, long)]
    pub worksheet: Option<String>,
}

/// Spreadsheet source choices
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceArg {
    /// CSV files exported from the spreadsheet
    Csv,
    /// Google Sheets API
    GoogleSheets,
}

impl From<SourceArg> for SourceKind {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Csv => SourceKind::Csv,
            SourceArg::GoogleSheets => SourceKind::GoogleSheets,
        }
    }
}

/// Arguments for the metrics command
#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// "Overall" or a year such as 2023
    #[arg(long, default_value = "Overall", value_parser = parse_view)]
    pub view: DashboardView,
}

fn parse_view(value: &str) -> Result<DashboardView, String> {
    value.parse().map_err(|e: bjj_core::CoreError| e.to_string())
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
