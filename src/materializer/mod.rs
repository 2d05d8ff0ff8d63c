//! Turns a parsed tree into directories and files on disk.
//!
//! The forest is first flattened into a pre-order [`MaterializePlan`]; the
//! plan is what a dry run prints and what Create mode applies, so both modes
//! always agree on the set of paths.

mod materializer;
mod plan;

pub use materializer::{
    MaterializationError, MaterializeReport, Materializer, PathConflictError,
};
pub use plan::{MaterializePlan, PlannedEntry};
