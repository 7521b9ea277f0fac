//! Explicit table definitions for the bjj schema.
//!
//! Components receive a [`Schema`] instead of reflecting the database at
//! runtime, so every table and column name the pipeline touches is known
//! up front and can be swapped out in tests.

use crate::reference::ReferenceKind;
use crate::skill::SkillKind;

/// Identity sequence owned by a fact table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceDef {
    /// Logical sequence name (`positions_practiced_id_seq`)
    pub name: &'static str,
    /// Table whose surrogate id the sequence feeds
    pub table: &'static str,
}

/// A table and the columns the pipeline writes to it, in insert order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    pub sequence: Option<SequenceDef>,
}

impl TableDef {
    /// `INSERT INTO <table> (<cols>) VALUES (?1, ?2, ...)`
    pub fn insert_sql(&self) -> String {
        let placeholders: Vec<String> = (1..=self.columns.len()).map(|i| format!("?{i}")).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.name,
            self.columns.join(", "),
            placeholders.join(", ")
        )
    }
}

/// Reference and fact tables of the bjj schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub class: TableDef,
    pub position: TableDef,
    pub moves: TableDef,
    pub class_attendance: TableDef,
    pub moves_practiced: TableDef,
    pub positions_practiced: TableDef,
}

impl Default for Schema {
    fn default() -> Self {
        Self::bjj()
    }
}

impl Schema {
    /// The schema created by the embedded migrations.
    pub fn bjj() -> Self {
        Self {
            class: TableDef {
                name: "class",
                columns: &["type", "duration_minutes", "location", "name"],
                sequence: None,
            },
            position: TableDef {
                name: "position",
                columns: &["name"],
                sequence: None,
            },
            moves: TableDef {
                name: "move",
                columns: &["type", "name"],
                sequence: None,
            },
            class_attendance: TableDef {
                name: "class_attendance",
                columns: &["date", "class_id", "notes"],
                sequence: None,
            },
            moves_practiced: TableDef {
                name: "moves_practiced",
                columns: &["date", "class_id", "move_id"],
                sequence: Some(SequenceDef {
                    name: "moves_practiced_id_seq",
                    table: "moves_practiced",
                }),
            },
            positions_practiced: TableDef {
                name: "positions_practiced",
                columns: &["date", "class_id", "position_id"],
                sequence: Some(SequenceDef {
                    name: "positions_practiced_id_seq",
                    table: "positions_practiced",
                }),
            },
        }
    }

    /// Reference table for a kind.
    pub fn reference_table(&self, kind: ReferenceKind) -> &TableDef {
        match kind {
            ReferenceKind::Class => &self.class,
            ReferenceKind::Position => &self.position,
            ReferenceKind::Move => &self.moves,
        }
    }

    /// Practiced-skill fact table for a kind.
    pub fn practiced_table(&self, kind: SkillKind) -> &TableDef {
        match kind {
            SkillKind::Position => &self.positions_practiced,
            SkillKind::Move => &self.moves_practiced,
        }
    }

    /// Fact tables in delete order: children first, parent last.
    pub fn fact_tables_delete_order(&self) -> [&TableDef; 3] {
        [
            &self.positions_practiced,
            &self.moves_practiced,
            &self.class_attendance,
        ]
    }

    /// Sequences reset after the delete phase.
    pub fn sequences_to_reset(&self) -> Vec<SequenceDef> {
        self.fact_tables_delete_order()
            .iter()
            .filter_map(|t| t.sequence)
            .collect()
    }
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
