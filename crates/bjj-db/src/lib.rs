//! SQLite store for bjj-journey.
//!
//! Owns the on-disk schema (embedded migrations for the base tables,
//! reference seed data and metric views), reads reference ids for the
//! Lookup Resolver, performs the transactional fact table swap, and serves
//! the read-only dashboard queries.

pub mod connection;
pub mod ddl;
pub mod error;
pub mod lookup;
pub mod metrics;
pub mod migration;
pub mod query;
pub mod sync;

pub use connection::BjjDb;
pub use error::{DbError, DbResult};
pub use metrics::{DashboardSummary, MonthlyClasses};
pub use sync::{replace_fact_tables, SyncReport, TableChange};
