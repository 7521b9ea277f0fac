//! Wide-to-long reshaping of practiced skills.
//!
//! A session row carries up to three positions and four moves in fixed slot
//! columns. Each non-blank slot becomes one practiced-skill row; blank slots
//! mean "not applicable" and produce nothing.

use crate::error::{CoreError, CoreResult};
use crate::fact::PracticedSkillRow;
use crate::record::IngestedRecord;
use crate::reference::ReferenceIds;
use crate::skill::SkillKind;
use chrono::NaiveDate;

/// One non-blank slot before its name is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillSlot {
    pub date: NaiveDate,
    pub class_id: i64,
    pub skill_name: String,
}

/// Unpivot the slot columns of `kind` into one row per non-blank slot.
///
/// Output order is slot-major: every record's first slot, then every
/// record's second slot, and so on.
pub fn unpivot(records: &[IngestedRecord], kind: SkillKind) -> Vec<SkillSlot> {
    let slot_count = kind.slot_columns().len();
    let mut slots = Vec::new();
    for slot in 0..slot_count {
        for record in records {
            if let Some(name) = &record.slots(kind)[slot] {
                slots.push(SkillSlot {
                    date: record.date,
                    class_id: record.class_id,
                    skill_name: name.clone(),
                });
            }
        }
    }
    slots
}

/// Reshape records into `(date, class_id, skill_id)` rows for one skill kind.
///
/// Every skill name must resolve; unknown names fail the whole reshape with
/// [`CoreError::MissingReference`].
pub fn reshape(
    records: &[IngestedRecord],
    kind: SkillKind,
    ids: &ReferenceIds,
) -> CoreResult<Vec<PracticedSkillRow>> {
    if ids.kind() != kind.reference_kind() {
        return Err(CoreError::InvalidTableKind {
            table: ids.kind().to_string(),
        });
    }

    let slots = unpivot(records, kind);
    let resolved = ids.resolve(slots.iter().map(|s| s.skill_name.as_str()))?;
    log::info!("Merged in IDs from {}", kind.reference_kind());

    Ok(slots
        .into_iter()
        .map(|s| PracticedSkillRow {
            date: s.date,
            class_id: s.class_id,
            skill_id: resolved[&s.skill_name],
        })
        .collect())
}

#[cfg(test)]
#[path = "reshape_test.rs"]
mod tests;
