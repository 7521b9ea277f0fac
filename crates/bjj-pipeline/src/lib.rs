//! Ingestion pipeline for bjj-journey.
//!
//! One [`Pipeline::run`] fetches the attendance worksheet, normalizes it,
//! resolves class, position and move names to ids, reshapes practiced
//! skills into long form, and swaps the fact tables in one transaction.

pub mod error;
pub mod pipeline;

pub use error::{PipelineError, PipelineResult};
pub use pipeline::{Pipeline, RunSummary};
