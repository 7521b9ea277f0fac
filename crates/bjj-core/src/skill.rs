//! Practiced-skill kinds and their fixed slot columns.

use crate::error::{CoreError, CoreResult};
use crate::reference::ReferenceKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Slot columns holding practiced positions, in source order.
pub const POSITION_SLOTS: [&str; 3] = ["position1", "position2", "position3"];

/// Slot columns holding practiced moves, in source order.
pub const MOVE_SLOTS: [&str; 4] = ["move1", "move2", "move3", "move4"];

/// A skill is either a move or a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Position,
    Move,
}

impl SkillKind {
    /// Both skill kinds.
    pub const ALL: [SkillKind; 2] = [SkillKind::Position, SkillKind::Move];

    pub fn as_str(self) -> &'static str {
        match self {
            SkillKind::Position => "position",
            SkillKind::Move => "move",
        }
    }

    /// Reference table the skill names resolve against.
    pub fn reference_kind(self) -> ReferenceKind {
        match self {
            SkillKind::Position => ReferenceKind::Position,
            SkillKind::Move => ReferenceKind::Move,
        }
    }

    /// Slot column names for this kind.
    pub fn slot_columns(self) -> &'static [&'static str] {
        match self {
            SkillKind::Position => &POSITION_SLOTS,
            SkillKind::Move => &MOVE_SLOTS,
        }
    }

    /// Plural form used in headlines ("positions", "moves").
    pub fn plural(self) -> &'static str {
        match self {
            SkillKind::Position => "positions",
            SkillKind::Move => "moves",
        }
    }
}

impl fmt::Display for SkillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillKind {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "position" => Ok(SkillKind::Position),
            "move" => Ok(SkillKind::Move),
            other => Err(CoreError::InvalidSkillKind {
                kind: other.to_string(),
            }),
        }
    }
}
