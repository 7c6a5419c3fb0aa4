#![forbid(unsafe_code)]

//! Layered rename rule table
//!
//! The table file is a JSON array of objects. Each object is one layer:
//! an ordered mapping of old name to new name. The first layer is the
//! import layer consumed by the import rewriter; every later layer
//! belongs to the cascade consumed by the layered symbol rewriter.
//! Layer objects iterate in document order; rule precedence depends on it.

use crate::error::RuleError;
use std::fs;
use std::path::Path;

/// A single rename pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRule {
    /// Old name; never empty
    pub from: String,
    /// New name; may equal `from` (no-op rule)
    pub to: String,
}

/// One ordered substitution pass
///
/// Keys within a layer are unique (the JSON object guarantees it) and a
/// layer must not contain a pair of rules that oscillate between two
/// targets (`a -> b` together with `b -> a`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleLayer {
    rules: Vec<RenameRule>,
}

impl RuleLayer {
    /// Builds a layer from one JSON object, validating its invariants
    fn from_object(object: &serde_json::Map<String, serde_json::Value>) -> Result<Self, RuleError> {
        let mut rules = Vec::with_capacity(object.len());

        for (from, value) in object {
            if from.is_empty() {
                return Err(RuleError::InvalidTable(
                    "rename source must not be empty".to_string(),
                ));
            }

            let to = value.as_str().ok_or_else(|| {
                RuleError::InvalidTable(format!(
                    "rename target for '{}' must be a string",
                    from
                ))
            })?;

            rules.push(RenameRule {
                from: from.clone(),
                to: to.to_string(),
            });
        }

        // Reject a -> b alongside b -> a; applying such a layer twice
        // would oscillate instead of converging.
        for rule in &rules {
            if rule.from != rule.to
                && rules
                    .iter()
                    .any(|other| other.from == rule.to && other.to == rule.from)
            {
                return Err(RuleError::InvalidTable(format!(
                    "rules '{}' and '{}' oscillate within one layer",
                    rule.from, rule.to
                )));
            }
        }

        Ok(RuleLayer { rules })
    }

    /// Returns the rules in document order
    pub fn rules(&self) -> &[RenameRule] {
        &self.rules
    }

    /// Number of rules in this layer
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the layer holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The full layered rule table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    import: RuleLayer,
    cascade: Vec<RuleLayer>,
}

impl RuleSet {
    /// Load a rule set from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `RuleError` if the file cannot be read or parsed, or if a
    /// layer violates a table invariant.
    pub fn load(path: &Path) -> Result<Self, RuleError> {
        let content = fs::read_to_string(path).map_err(|e| RuleError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Parse a rule set from a JSON string
    pub fn from_json(content: &str) -> Result<Self, RuleError> {
        let layers: Vec<serde_json::Map<String, serde_json::Value>> =
            serde_json::from_str(content)?;

        let Some((import_object, cascade_objects)) = layers.split_first() else {
            return Err(RuleError::InvalidTable(
                "rule table must contain at least the import layer".to_string(),
            ));
        };

        let import = RuleLayer::from_object(import_object)?;
        let cascade = cascade_objects
            .iter()
            .map(RuleLayer::from_object)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RuleSet { import, cascade })
    }

    /// The module-import rename layer (layer 0)
    pub fn import_layer(&self) -> &RuleLayer {
        &self.import
    }

    /// The cascade layers (1..N-1) in definition order
    ///
    /// The layered symbol rewriter applies these in reverse, so later
    /// layers take precedence.
    pub fn cascade_layers(&self) -> &[RuleLayer] {
        &self.cascade
    }

    /// Total number of layers, import layer included
    pub fn layer_count(&self) -> usize {
        1 + self.cascade.len()
    }

    /// Total number of rename pairs across all layers
    pub fn rule_count(&self) -> usize {
        self.import.len() + self.cascade.iter().map(RuleLayer::len).sum::<usize>()
    }
}
