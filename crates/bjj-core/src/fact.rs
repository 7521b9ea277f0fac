//! Rows of the fact tables rebuilt on every pipeline run.

use crate::error::{CoreError, CoreResult};
use crate::record::IngestedRecord;
use crate::reference::ReferenceIds;
use crate::reshape::reshape;
use crate::skill::SkillKind;
use chrono::NaiveDate;
use std::collections::HashSet;

/// One attended session, keyed by `(date, class_id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassAttendanceRow {
    pub date: NaiveDate,
    pub class_id: i64,
    pub notes: Option<String>,
}

/// One skill practiced in one session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PracticedSkillRow {
    pub date: NaiveDate,
    pub class_id: i64,
    pub skill_id: i64,
}

/// Freshly derived contents of the three fact tables for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactTables {
    pub class_attendance: Vec<ClassAttendanceRow>,
    pub moves_practiced: Vec<PracticedSkillRow>,
    pub positions_practiced: Vec<PracticedSkillRow>,
}

impl FactTables {
    /// Derive all fact rows from ingested records.
    ///
    /// Fails before anything is written if a session is duplicated or a
    /// skill name does not resolve.
    pub fn build(
        records: &[IngestedRecord],
        position_ids: &ReferenceIds,
        move_ids: &ReferenceIds,
    ) -> CoreResult<Self> {
        Ok(Self {
            class_attendance: class_attendance_rows(records)?,
            moves_practiced: reshape(records, SkillKind::Move, move_ids)?,
            positions_practiced: reshape(records, SkillKind::Position, position_ids)?,
        })
    }

    /// Practiced-skill rows for a kind.
    pub fn practiced(&self, kind: SkillKind) -> &[PracticedSkillRow] {
        match kind {
            SkillKind::Position => &self.positions_practiced,
            SkillKind::Move => &self.moves_practiced,
        }
    }
}

/// Project records down to `(date, class_id, notes)`, rejecting duplicate
/// sessions.
pub fn class_attendance_rows(records: &[IngestedRecord]) -> CoreResult<Vec<ClassAttendanceRow>> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        if !seen.insert((record.date, record.class_id)) {
            return Err(CoreError::DuplicateSession {
                date: record.date.to_string(),
                class_id: record.class_id,
            });
        }
        rows.push(ClassAttendanceRow {
            date: record.date,
            class_id: record.class_id,
            notes: record.notes.clone(),
        });
    }
    Ok(rows)
}
