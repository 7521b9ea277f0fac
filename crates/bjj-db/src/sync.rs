//! Atomic replacement of the fact tables.
//!
//! One run deletes every fact row (children first), resets the practiced
//! tables' id sequences, then inserts the freshly derived rows (parent
//! first), all inside a single transaction. Readers see either the previous
//! snapshot or the complete new one.

use crate::connection::BjjDb;
use crate::error::{DbError, DbResult};
use crate::query::validate_identifier;
use bjj_core::{
    ClassAttendanceRow, FactTables, PracticedSkillRow, Schema, SequenceDef, SkillKind, TableDef,
};
use rusqlite::{params, Connection};

/// Rows removed and written for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableChange {
    pub table: &'static str,
    pub deleted: usize,
    pub inserted: usize,
}

/// Outcome of a committed swap, tables in delete order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub tables: Vec<TableChange>,
    pub sequences_reset: Vec<&'static str>,
}

impl SyncReport {
    /// Change recorded for `table`, if it was touched.
    pub fn table(&self, table: &str) -> Option<&TableChange> {
        self.tables.iter().find(|t| t.table == table)
    }

    fn record_delete(&mut self, table: &'static str, deleted: usize) {
        self.tables.push(TableChange {
            table,
            deleted,
            inserted: 0,
        });
    }

    fn record_insert(&mut self, table: &'static str, inserted: usize) {
        match self.tables.iter_mut().find(|t| t.table == table) {
            Some(change) => change.inserted = inserted,
            None => self.tables.push(TableChange {
                table,
                deleted: 0,
                inserted,
            }),
        }
    }
}

fn sync_failure(table: &str, step: &'static str, err: impl std::fmt::Display) -> DbError {
    DbError::SyncFailure {
        table: table.to_string(),
        step,
        message: err.to_string(),
    }
}

/// Delete every row of `table`, returning the number removed.
pub fn delete_all(conn: &Connection, table: &TableDef) -> DbResult<usize> {
    validate_identifier(table.name)?;
    conn.execute(&format!("DELETE FROM {}", table.name), [])
        .map_err(|e| sync_failure(table.name, "delete", e))
}

/// Restart a table's id sequence so the next insert into an empty table
/// gets id 1.
pub fn reset_sequence(conn: &Connection, sequence: &SequenceDef) -> DbResult<()> {
    conn.execute(
        "DELETE FROM sqlite_sequence WHERE name = ?1",
        params![sequence.table],
    )
    .map_err(|e| sync_failure(sequence.table, "sequence reset", e))?;
    log::debug!("Reset sequence {}", sequence.name);
    Ok(())
}

/// Insert attendance rows into `table` (`date, class_id, notes`).
pub fn insert_class_attendance(
    conn: &Connection,
    table: &TableDef,
    rows: &[ClassAttendanceRow],
) -> DbResult<usize> {
    let mut stmt = conn
        .prepare(&table.insert_sql())
        .map_err(|e| sync_failure(table.name, "insert", e))?;
    for row in rows {
        stmt.execute(params![row.date, row.class_id, row.notes])
            .map_err(|e| sync_failure(table.name, "insert", e))?;
    }
    Ok(rows.len())
}

/// Insert practiced-skill rows into `table` (`date, class_id, <skill>_id`).
pub fn insert_practiced(
    conn: &Connection,
    table: &TableDef,
    rows: &[PracticedSkillRow],
) -> DbResult<usize> {
    let mut stmt = conn
        .prepare(&table.insert_sql())
        .map_err(|e| sync_failure(table.name, "insert", e))?;
    for row in rows {
        stmt.execute(params![row.date, row.class_id, row.skill_id])
            .map_err(|e| sync_failure(table.name, "insert", e))?;
    }
    Ok(rows.len())
}

/// Replace the contents of the three fact tables in one transaction.
///
/// Any failure rolls back every step and surfaces as
/// [`DbError::SyncFailure`] (or `TransactionError` for BEGIN/COMMIT).
pub fn replace_fact_tables(
    db: &BjjDb,
    schema: &Schema,
    facts: &FactTables,
) -> DbResult<SyncReport> {
    let report = db.transaction(|conn| {
        let mut report = SyncReport::default();

        for table in schema.fact_tables_delete_order() {
            let deleted = delete_all(conn, table)?;
            log::info!("Deleted {deleted} rows from {}", table.name);
            report.record_delete(table.name, deleted);
        }

        for sequence in schema.sequences_to_reset() {
            reset_sequence(conn, &sequence)?;
            log::info!("Reset {} for {}", sequence.name, sequence.table);
            report.sequences_reset.push(sequence.name);
        }

        let inserted =
            insert_class_attendance(conn, &schema.class_attendance, &facts.class_attendance)?;
        log::info!("Inserted {inserted} rows into {}", schema.class_attendance.name);
        report.record_insert(schema.class_attendance.name, inserted);

        for kind in [SkillKind::Move, SkillKind::Position] {
            let table = schema.practiced_table(kind);
            let inserted = insert_practiced(conn, table, facts.practiced(kind))?;
            log::info!("Inserted {inserted} rows into {}", table.name);
            report.record_insert(table.name, inserted);
        }

        Ok(report)
    })?;

    log::info!("Committed fact table swap");
    Ok(report)
}

#[cfg(test)]
#[path = "sync_test.rs"]
mod tests;
