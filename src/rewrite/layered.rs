#![forbid(unsafe_code)]

//! Layered symbol rewriter
//!
//! Applies the cascade layers in reverse definition order: the
//! last-defined layer runs first, so more specific, later-added renames
//! take precedence over earlier, more general ones and a general rule
//! never re-matches text a specific rule already rewrote. Within a layer,
//! every pair is an unconditional literal substring replacement over all
//! occurrences — no word boundaries. Collateral matches are the table
//! author's accepted risk.

use crate::rewrite::Rewrite;
use crate::rules::RuleLayer;

/// Applies the non-import layers of a rule set
#[derive(Debug)]
pub struct LayerCascade<'a> {
    layers: &'a [RuleLayer],
}

impl<'a> LayerCascade<'a> {
    /// Creates a cascade over the given layers, in definition order
    pub fn new(layers: &'a [RuleLayer]) -> Self {
        LayerCascade { layers }
    }
}

impl Rewrite for LayerCascade<'_> {
    fn rewrite(&self, text: &str) -> String {
        let mut out = text.to_string();

        for layer in self.layers.iter().rev() {
            for rule in layer.rules() {
                out = out.replace(&rule.from, &rule.to);
            }
        }

        out
    }
}
