//! Configuration types and parsing for bjj.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Spreadsheet the pipeline reads by default.
pub const DEFAULT_SPREADSHEET: &str = "BJJ Dashboard";

/// Worksheet the pipeline reads by default.
pub const DEFAULT_WORKSHEET: &str = "BJJ Total Attendance";

/// Environment variable read by the environment credential provider.
pub const DEFAULT_TOKEN_ENV: &str = "BJJ_GOOGLE_ACCESS_TOKEN";

/// Authorized-user file written by the gspread consent flow.
pub const DEFAULT_AUTHORIZED_USER_PATH: &str = "~/.config/gspread/authorized_user.json";

const DEFAULT_DB_PATH: &str = "bjj.db";

const DEFAULT_EXPORT_DIR: &str = "exports";

/// Main configuration from bjj.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Where attendance records are fetched from
    #[serde(default)]
    pub source: SourceConfig,
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Database file path, or `:memory:`
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Spreadsheet source selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// CSV files exported from the spreadsheet (default)
    #[default]
    Csv,
    /// Google Sheets over HTTP
    GoogleSheets,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Csv => write!(f, "csv"),
            SourceKind::GoogleSheets => write!(f, "google_sheets"),
        }
    }
}

/// Spreadsheet source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,

    /// Spreadsheet name
    #[serde(default = "default_spreadsheet")]
    pub spreadsheet: String,

    /// Worksheet name within the spreadsheet
    #[serde(default = "default_worksheet")]
    pub worksheet: String,

    /// Directory holding `<spreadsheet>/<worksheet>.csv` exports
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// Credentials for Google Sheets
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            spreadsheet: default_spreadsheet(),
            worksheet: default_worksheet(),
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            credentials: CredentialsConfig::default(),
        }
    }
}

/// How Google Sheets credentials are obtained
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CredentialsConfig {
    /// Bearer token read from an environment variable
    Environment {
        #[serde(default = "default_token_env")]
        token_env: String,
    },
    /// Cached OAuth authorized-user file from an interactive consent flow
    AuthorizedUser {
        #[serde(default = "default_authorized_user_path")]
        path: PathBuf,
    },
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        CredentialsConfig::Environment {
            token_env: default_token_env(),
        }
    }
}

fn default_db_path() -> String {
    DEFAULT_DB_PATH.to_string()
}

fn default_spreadsheet() -> String {
    DEFAULT_SPREADSHEET.to_string()
}

fn default_worksheet() -> String {
    DEFAULT_WORKSHEET.to_string()
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_DIR)
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

fn default_authorized_user_path() -> PathBuf {
    PathBuf::from(DEFAULT_AUTHORIZED_USER_PATH)
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory.
    ///
    /// Looks for bjj.yml or bjj.yaml; falls back to defaults when neither
    /// exists.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("bjj.yml");
        let yaml_path = dir.join("bjj.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            log::debug!(
                "No bjj.yml found in {}, using default configuration",
                dir.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> CoreResult<()> {
        if self.database.path.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "database.path cannot be empty".to_string(),
            });
        }
        if self.source.spreadsheet.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "source.spreadsheet cannot be empty".to_string(),
            });
        }
        if self.source.worksheet.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "source.worksheet cannot be empty".to_string(),
            });
        }
        if let CredentialsConfig::Environment { token_env } = &self.source.credentials {
            if token_env.trim().is_empty() {
                return Err(CoreError::ConfigInvalid {
                    message: "source.credentials.token_env cannot be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
