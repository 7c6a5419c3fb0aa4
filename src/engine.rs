#![forbid(unsafe_code)]

//! Migration engine: file discovery and the stage orchestrator

pub mod file_walker;
pub mod stages;

pub use stages::{Migration, MigrationReport, Stage, StageError, StageOutcome};
