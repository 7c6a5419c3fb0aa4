#![forbid(unsafe_code)]

//! Rename rule tables
//!
//! Two tables drive the migration: an ordered array of rename layers
//! (layer 0 holds module-import renames, the rest form the cascade) and a
//! flat table of context-qualified symbol renames. Both are JSON files
//! loaded once and read-only afterwards.

pub mod globals;
pub mod ruleset;

pub use globals::{ContextualRule, GlobalRenames};
pub use ruleset::{RenameRule, RuleLayer, RuleSet};

use serde::{Deserialize, Serialize};

/// A literal token replacement pair
///
/// Applied as unconditional substring replacement, with no context
/// checks. Used on non-code asset text and for the fixed text fixes in
/// the configuration stages, where the chosen literals are unique enough
/// that collisions are a negligible, accepted risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRule {
    /// Literal to search for
    pub from: String,
    /// Replacement text
    pub to: String,
}

impl TokenRule {
    /// Creates a new TokenRule
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        TokenRule {
            from: from.into(),
            to: to.into(),
        }
    }
}
