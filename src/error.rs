//! Error types for nameshift
//!
//! This module defines the error hierarchy used throughout the tool.
//! Stage- and walker-local error enums live next to the modules that
//! produce them; the types here are the ones that cross module seams.

use std::path::PathBuf;

/// Configuration-related errors (nameshift.toml)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error while reading the configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration syntax
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Structurally valid configuration with an invalid value
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Rule-table errors (layers and globals JSON files)
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Rule table file could not be read
    #[error("Failed to read rule table {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rule table is not valid JSON
    #[error("Invalid rule table syntax: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rule table parsed but violates a table invariant
    #[error("Invalid rule table: {0}")]
    InvalidTable(String),
}

/// Top-level error type for a migration run
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule table error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// The target project root does not exist
    #[error("Project root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
