#![forbid(unsafe_code)]

//! Context-qualified global symbol renames
//!
//! The globals table is a flat JSON object mapping old symbol names to
//! replacements. Unlike cascade layers, these renames are applied only in
//! specific syntactic contexts by the contextual rewriter.
//!
//! Symbols are processed in document order. When one symbol is a
//! substring of another, the more specific symbol must be listed first,
//! otherwise the shorter rule produces spurious partial matches. Likewise
//! a replacement must not itself match another symbol's context patterns.
//! Both are the table author's responsibility and are not validated.

use crate::error::RuleError;
use std::fs;
use std::path::Path;

/// A rename applied only in recognized syntactic contexts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextualRule {
    /// Symbol to recognize
    pub symbol: String,
    /// Replacement symbol
    pub replacement: String,
}

/// The ordered table of contextual renames
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalRenames {
    rules: Vec<ContextualRule>,
}

impl GlobalRenames {
    /// Load the globals table from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `RuleError` if the file cannot be read or parsed, or if an
    /// entry is empty or non-string.
    pub fn load(path: &Path) -> Result<Self, RuleError> {
        let content = fs::read_to_string(path).map_err(|e| RuleError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Parse the globals table from a JSON string
    pub fn from_json(content: &str) -> Result<Self, RuleError> {
        let table: serde_json::Map<String, serde_json::Value> = serde_json::from_str(content)?;

        let mut rules = Vec::with_capacity(table.len());
        for (symbol, value) in &table {
            if symbol.is_empty() {
                return Err(RuleError::InvalidTable(
                    "global symbol must not be empty".to_string(),
                ));
            }

            let replacement = value.as_str().ok_or_else(|| {
                RuleError::InvalidTable(format!(
                    "replacement for global '{}' must be a string",
                    symbol
                ))
            })?;

            rules.push(ContextualRule {
                symbol: symbol.clone(),
                replacement: replacement.to_string(),
            });
        }

        Ok(GlobalRenames { rules })
    }

    /// Returns the rules in document order
    pub fn rules(&self) -> &[ContextualRule] {
        &self.rules
    }

    /// Number of symbols in the table
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the table holds no symbols
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
