//! Error types for bjj-core

use thiserror::Error;

/// Core error type for bjj-journey
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse configuration file
    #[error("[E002] Failed to parse config: {message}")]
    ConfigParseError { message: String },

    /// E003: Invalid configuration value
    #[error("[E003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E004: IO error with file path context
    #[error("[E004] IO error at {path}: {source}")]
    IoWithPath {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// E005: Reference table identifier outside class/position/move
    #[error("[E005] Invalid reference table '{table}': expected one of class, position, move")]
    InvalidTableKind { table: String },

    /// E006: Skill kind outside position/move
    #[error("[E006] Invalid skill kind '{kind}': expected one of position, move")]
    InvalidSkillKind { kind: String },

    /// E007: Source data lacks a required column
    #[error("[E007] Source data is missing required column '{column}'")]
    MissingColumn { column: String },

    /// E008: A source row could not be interpreted
    #[error("[E008] Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// E009: Names with no id in the reference table
    #[error("[E009] The following records are missing a {table} id: {}", format_names(.names))]
    MissingReference { table: String, names: Vec<String> },

    /// E010: A name maps to more than one reference id
    #[error("[E010] Reference table '{table}' has more than one id for name '{name}'")]
    AmbiguousReference { table: String, name: String },

    /// E011: Two records describe the same session
    #[error("[E011] Duplicate session: class {class_id} on {date} appears more than once")]
    DuplicateSession { date: String, class_id: i64 },

    /// E012: Dashboard view outside `Overall` or a year
    #[error("[E012] Invalid dashboard view '{view}': expected 'Overall' or a year")]
    InvalidView { view: String },
}

fn format_names(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{n}'")).collect();
    format!("{{{}}}", quoted.join(", "))
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl From<serde_yaml::Error> for CoreError {
    fn from(err: serde_yaml::Error) -> Self {
        CoreError::ConfigParseError {
            message: err.to_string(),
        }
    }
}
