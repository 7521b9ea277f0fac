//! Embedded migrations for the bjj database.
//!
//! Each migration is a numbered `.sql` file embedded via `include_str!`.
//! [`MIGRATIONS`] is ordered by version and consumed by
//! [`crate::migration::run_migrations`].

/// A single migration.
pub struct Migration {
    /// Sequential version number (1-based).
    pub version: i32,
    /// Raw SQL to execute.
    pub sql: &'static str,
}

/// All known migrations, in order.
pub static MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        sql: include_str!("v001_base_tables.sql"),
    },
    Migration {
        version: 2,
        sql: include_str!("v002_reference_seed.sql"),
    },
    Migration {
        version: 3,
        sql: include_str!("v003_metric_views.sql"),
    },
];
