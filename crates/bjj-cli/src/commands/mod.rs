//! CLI command implementations

pub(crate) mod common;
pub(crate) mod ingest;
pub(crate) mod metrics;
pub(crate) mod migrate;
