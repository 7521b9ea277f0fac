//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use bjj_core::Config;
use bjj_db::BjjDb;
use std::path::Path;

use crate::cli::{GlobalArgs, IngestArgs};

/// Load configuration and apply global overrides.
///
/// An explicit `--config` must exist; otherwise `bjj.yml` in the current
/// directory is used when present and defaults when not.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    let mut config = match &global.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load_from_dir(Path::new("."))
            .context("Failed to load config from the current directory")?,
    };

    if let Some(database) = &global.database {
        config.database.path = database.clone();
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Apply ingest-specific overrides on top of a loaded config.
pub(crate) fn apply_ingest_overrides(config: &mut Config, args: &IngestArgs) -> Result<()> {
    if let Some(source) = args.source {
        config.source.kind = source.into();
    }
    if let Some(dir) = &args.export_dir {
        config.source.export_dir = dir.clone();
    }
    if let Some(spreadsheet) = &args.spreadsheet {
        config.source.spreadsheet = spreadsheet.clone();
    }
    if let Some(worksheet) = &args.worksheet {
        config.source.worksheet = worksheet.clone();
    }
    config.validate().context("Invalid configuration")?;
    Ok(())
}

/// Open the configured database, applying pending migrations.
pub(crate) fn open_database(config: &Config) -> Result<BjjDb> {
    let path = Path::new(&config.database.path);
    BjjDb::open(path).with_context(|| format!("Failed to open database {}", path.display()))
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
