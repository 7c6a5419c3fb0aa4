#![forbid(unsafe_code)]

//! Nameshift: one-shot rename migration for project sources and engine assets
//!
//! Nameshift rewrites a project in place according to ordered rename rule
//! tables, distinguishing import statements, contextual symbol references,
//! and literal asset tokens so that unrelated text survives the sweep.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rewrite;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, MigrateError, RuleError};

// Re-export core domain types for convenient access
pub use types::GlobPattern;
