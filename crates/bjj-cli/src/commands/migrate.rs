//! Migrate command implementation

use anyhow::Result;

use crate::cli::GlobalArgs;
use crate::commands::common::{load_config, open_database};

/// Execute the migrate command
pub(crate) fn execute(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let db = open_database(&config)?;
    println!(
        "Database {} is at schema version {}",
        config.database.path,
        db.schema_version()?
    );
    Ok(())
}
