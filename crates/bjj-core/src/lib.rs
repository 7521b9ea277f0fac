//! bjj-core - Core library for bjj-journey
//!
//! This crate provides the domain types shared by every other crate:
//! configuration, the explicit table schema, spreadsheet record
//! normalization, reference-name resolution and the wide-to-long reshaping
//! of practiced skills.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod fact;
pub mod record;
pub mod reference;
pub mod reshape;
pub mod schema;
pub mod skill;

pub use config::{Config, CredentialsConfig, SourceKind};
pub use dashboard::{DashboardView, SkillCount};
pub use error::{CoreError, CoreResult};
pub use fact::{ClassAttendanceRow, FactTables, PracticedSkillRow};
pub use record::{IngestedRecord, NormalizedRecord, RawRecord};
pub use reference::{ReferenceIds, ReferenceKind};
pub use schema::{Schema, SequenceDef, TableDef};
pub use skill::SkillKind;
