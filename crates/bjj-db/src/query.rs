//! Read helpers over the fact tables.
//!
//! Return plain domain types so callers don't need a direct `rusqlite`
//! dependency.

use crate::error::{DbError, DbResult};
use bjj_core::{ClassAttendanceRow, PracticedSkillRow, Schema, SkillKind};
use rusqlite::Connection;

/// Reject anything but `[A-Za-z0-9_]+` before splicing a name into SQL.
pub(crate) fn validate_identifier(name: &str) -> DbResult<()> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(DbError::QueryError(format!(
            "invalid identifier '{name}': must contain only alphanumeric characters and underscores"
        )));
    }
    Ok(())
}

/// Count rows in a table.
pub fn table_row_count(conn: &Connection, table_name: &str) -> DbResult<i64> {
    validate_identifier(table_name)?;
    let count: i64 = conn
        .query_row(&format!("SELECT COUNT(*) FROM {table_name}"), [], |row| {
            row.get(0)
        })
        .map_err(|e| DbError::QueryError(format!("count failed for {table_name}: {e}")))?;
    Ok(count)
}

/// Every `class_attendance` row, ordered by `(date, class_id)`.
pub fn class_attendance_rows(
    conn: &Connection,
    schema: &Schema,
) -> DbResult<Vec<ClassAttendanceRow>> {
    let table = schema.class_attendance.name;
    let mut stmt = conn.prepare(&format!(
        "SELECT date, class_id, notes FROM {table} ORDER BY date, class_id"
    ))?;
    let rows = stmt
        .query_map([], |row| {
            Ok(ClassAttendanceRow {
                date: row.get(0)?,
                class_id: row.get(1)?,
                notes: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DbError::QueryError(format!("failed to read {table}: {e}")))?;
    Ok(rows)
}

/// Every practiced-skill row of a kind, in id order.
pub fn practiced_rows(
    conn: &Connection,
    schema: &Schema,
    kind: SkillKind,
) -> DbResult<Vec<PracticedSkillRow>> {
    let table = schema.practiced_table(kind).name;
    let id_column = kind.reference_kind().id_column();
    let mut stmt = conn.prepare(&format!(
        "SELECT date, class_id, {id_column} FROM {table} ORDER BY id"
    ))?;
    let rows = stmt
        .query_map([], |row| {
            Ok(PracticedSkillRow {
                date: row.get(0)?,
                class_id: row.get(1)?,
                skill_id: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DbError::QueryError(format!("failed to read {table}: {e}")))?;
    Ok(rows)
}

/// Surrogate ids of a practiced-skill table, ascending.
pub fn practiced_ids(conn: &Connection, schema: &Schema, kind: SkillKind) -> DbResult<Vec<i64>> {
    let table = schema.practiced_table(kind).name;
    let mut stmt = conn.prepare(&format!("SELECT id FROM {table} ORDER BY id"))?;
    let ids = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<i64>, _>>()?;
    Ok(ids)
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
