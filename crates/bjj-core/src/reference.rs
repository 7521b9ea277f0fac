//! Reference tables and name-to-id resolution.
//!
//! Reference tables (`class`, `position`, `move`) are seeded once and never
//! rewritten by the pipeline. [`ReferenceIds`] is the in-memory view of one
//! of them: it resolves human-readable names to surrogate ids and fails
//! loudly when a name is unknown, so no fact row is ever written with a
//! missing id.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

/// The three reference tables a name can be resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    /// Scheduled class at the academy
    Class,
    /// Grappling position
    Position,
    /// Technique (submission, sweep, pass, ...)
    Move,
}

impl ReferenceKind {
    /// All reference kinds, in seeding order.
    pub const ALL: [ReferenceKind; 3] = [
        ReferenceKind::Class,
        ReferenceKind::Position,
        ReferenceKind::Move,
    ];

    /// Table name, which is also the source column holding the name.
    pub fn as_str(self) -> &'static str {
        match self {
            ReferenceKind::Class => "class",
            ReferenceKind::Position => "position",
            ReferenceKind::Move => "move",
        }
    }

    /// Name of the foreign key column in fact tables (`class_id`, ...).
    pub fn id_column(self) -> &'static str {
        match self {
            ReferenceKind::Class => "class_id",
            ReferenceKind::Position => "position_id",
            ReferenceKind::Move => "move_id",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReferenceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "class" => Ok(ReferenceKind::Class),
            "position" => Ok(ReferenceKind::Position),
            "move" => Ok(ReferenceKind::Move),
            other => Err(CoreError::InvalidTableKind {
                table: other.to_string(),
            }),
        }
    }
}

/// Name-to-id mapping for one reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceIds {
    kind: ReferenceKind,
    ids: HashMap<String, i64>,
}

impl ReferenceIds {
    /// Build the mapping from `(id, name)` rows read from a reference table.
    ///
    /// A name that appears with two different ids is rejected rather than
    /// resolved arbitrarily. The same `(id, name)` pair repeated is harmless.
    pub fn from_rows<I>(kind: ReferenceKind, rows: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (i64, String)>,
    {
        let mut ids = HashMap::new();
        for (id, name) in rows {
            match ids.get(&name) {
                Some(existing) if *existing != id => {
                    return Err(CoreError::AmbiguousReference {
                        table: kind.to_string(),
                        name,
                    });
                }
                Some(_) => {}
                None => {
                    ids.insert(name, id);
                }
            }
        }
        Ok(Self { kind, ids })
    }

    /// The reference table these ids came from.
    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when the reference table is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Look up a single name.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.ids.get(name).copied()
    }

    /// Resolve every name, returning a mapping for all of them.
    ///
    /// Fails with [`CoreError::MissingReference`] listing every unresolved
    /// name (sorted, deduplicated, verbatim) if any name is unknown.
    pub fn resolve<'a, I>(&self, names: I) -> CoreResult<HashMap<String, i64>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut resolved = HashMap::new();
        let mut missing = BTreeSet::new();
        for name in names {
            match self.ids.get(name) {
                Some(id) => {
                    resolved.insert(name.to_string(), *id);
                }
                None => {
                    missing.insert(name.to_string());
                }
            }
        }

        if !missing.is_empty() {
            return Err(CoreError::MissingReference {
                table: self.kind.to_string(),
                names: missing.into_iter().collect(),
            });
        }
        Ok(resolved)
    }
}

#[cfg(test)]
#[path = "reference_test.rs"]
mod tests;
