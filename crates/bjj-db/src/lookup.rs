//! Reference table reads backing name-to-id resolution.

use crate::error::DbResult;
use bjj_core::{ReferenceIds, ReferenceKind, Schema};
use rusqlite::Connection;
use std::collections::HashMap;

/// Read the full `name -> id` mapping of one reference table.
pub fn reference_ids(
    conn: &Connection,
    schema: &Schema,
    kind: ReferenceKind,
) -> DbResult<ReferenceIds> {
    let table = schema.reference_table(kind).name;
    log::info!("Getting IDs from {table}");

    let mut stmt = conn.prepare(&format!("SELECT id, name FROM {table} ORDER BY id"))?;
    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("Read {} rows from {table}", rows.len());

    Ok(ReferenceIds::from_rows(kind, rows)?)
}

/// Resolve `names` against the reference table named `table`.
///
/// `table` must be one of `class`, `position`, `move`; anything else fails
/// with `InvalidTableKind` before a query is issued. Any name without an id
/// fails the whole call with `MissingReference`.
pub fn resolve_ids(
    conn: &Connection,
    schema: &Schema,
    table: &str,
    names: &[&str],
) -> DbResult<HashMap<String, i64>> {
    let kind: ReferenceKind = table.parse()?;
    let ids = reference_ids(conn, schema, kind)?;
    Ok(ids.resolve(names.iter().copied())?)
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod tests;
