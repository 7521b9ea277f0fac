//! Spreadsheet records and their normalization.
//!
//! A [`RawRecord`] is one spreadsheet line exactly as the source returned it.
//! [`normalize_records`] cleans column names and blanks and parses dates,
//! producing [`NormalizedRecord`]s; [`attach_class_ids`] then resolves the
//! class name, producing the canonical [`IngestedRecord`] every fact table is
//! derived from.

use crate::error::{CoreError, CoreResult};
use crate::reference::{ReferenceIds, ReferenceKind};
use crate::skill::{SkillKind, MOVE_SLOTS, POSITION_SLOTS};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Column holding the session date.
pub const DATE_COLUMN: &str = "date";
/// Column holding the class name.
pub const CLASS_COLUMN: &str = "class";
/// Column holding free-text notes.
pub const NOTES_COLUMN: &str = "notes";

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// One spreadsheet line as ordered `(column, text)` pairs.
///
/// Blank cells are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<(String, String)>,
}

impl RawRecord {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Build from borrowed pairs; mostly useful in tests.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Value of the first column with exactly this name.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == column)
            .map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A record with clean column names, blanks as `None` and a parsed date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub date: NaiveDate,
    pub class: String,
    pub notes: Option<String>,
    pub positions: [Option<String>; 3],
    pub moves: [Option<String>; 4],
}

/// A normalized record with its class resolved; the canonical column set
/// (`date, class, class_id, notes, position1-3, move1-4`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestedRecord {
    pub date: NaiveDate,
    pub class: String,
    pub class_id: i64,
    pub notes: Option<String>,
    pub positions: [Option<String>; 3],
    pub moves: [Option<String>; 4],
}

impl IngestedRecord {
    /// Slot values for a skill kind, in slot column order.
    pub fn slots(&self, kind: SkillKind) -> &[Option<String>] {
        match kind {
            SkillKind::Position => &self.positions,
            SkillKind::Move => &self.moves,
        }
    }
}

/// Lowercase a column name and strip every non-word character.
///
/// `"Position 1"` becomes `position1`, `"Class (Name)"` becomes `classname`.
pub fn normalize_column_name(column: &str) -> String {
    column
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

/// Parse a session date in ISO (`2023-01-31`) or US (`1/31/2023`) form.
///
/// The year must be written with exactly four digits; `1/3/23` is rejected
/// rather than read as year 23.
pub fn parse_session_date(value: &str) -> Option<NaiveDate> {
    if !has_four_digit_year(value) {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

fn has_four_digit_year(value: &str) -> bool {
    let year = if value.contains('/') {
        value.rsplit('/').next()
    } else {
        value.split('-').next()
    };
    matches!(year, Some(y) if y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()))
}

/// Normalize raw spreadsheet records.
///
/// `date` and `class` columns are required; slot and notes columns may be
/// absent and are then treated as blank.
pub fn normalize_records(raw: &[RawRecord]) -> CoreResult<Vec<NormalizedRecord>> {
    let mut records = Vec::with_capacity(raw.len());
    for (idx, record) in raw.iter().enumerate() {
        records.push(normalize_record(idx + 1, record)?);
    }
    log::debug!("Normalized {} records", records.len());
    Ok(records)
}

fn normalize_record(row: usize, record: &RawRecord) -> CoreResult<NormalizedRecord> {
    let mut columns: HashMap<String, Option<&str>> = HashMap::with_capacity(record.len());
    for (name, value) in record.fields() {
        let value = if value.is_empty() {
            None
        } else {
            Some(value.as_str())
        };
        columns.entry(normalize_column_name(name)).or_insert(value);
    }

    let date_text =
        required_column(&columns, DATE_COLUMN)?.ok_or_else(|| CoreError::InvalidRecord {
            row,
            message: "date is blank".to_string(),
        })?;
    let date = parse_session_date(date_text).ok_or_else(|| CoreError::InvalidRecord {
        row,
        message: format!("unrecognized date '{date_text}'"),
    })?;

    let class =
        required_column(&columns, CLASS_COLUMN)?.ok_or_else(|| CoreError::InvalidRecord {
            row,
            message: "class is blank".to_string(),
        })?;

    Ok(NormalizedRecord {
        date,
        class: class.to_string(),
        notes: optional_column(&columns, NOTES_COLUMN),
        positions: POSITION_SLOTS.map(|c| optional_column(&columns, c)),
        moves: MOVE_SLOTS.map(|c| optional_column(&columns, c)),
    })
}

fn required_column<'a>(
    columns: &HashMap<String, Option<&'a str>>,
    column: &str,
) -> CoreResult<Option<&'a str>> {
    columns
        .get(column)
        .copied()
        .ok_or_else(|| CoreError::MissingColumn {
            column: column.to_string(),
        })
}

fn optional_column(columns: &HashMap<String, Option<&str>>, column: &str) -> Option<String> {
    columns.get(column).copied().flatten().map(str::to_string)
}

/// Resolve every record's class name against the class reference table.
///
/// All unknown class names are reported together.
pub fn attach_class_ids(
    records: Vec<NormalizedRecord>,
    class_ids: &ReferenceIds,
) -> CoreResult<Vec<IngestedRecord>> {
    if class_ids.kind() != ReferenceKind::Class {
        return Err(CoreError::InvalidTableKind {
            table: class_ids.kind().to_string(),
        });
    }

    let resolved = class_ids.resolve(records.iter().map(|r| r.class.as_str()))?;
    log::info!("Merged in IDs from {}", ReferenceKind::Class);

    Ok(records
        .into_iter()
        .map(|r| IngestedRecord {
            class_id: resolved[&r.class],
            date: r.date,
            class: r.class,
            notes: r.notes,
            positions: r.positions,
            moves: r.moves,
        })
        .collect())
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
