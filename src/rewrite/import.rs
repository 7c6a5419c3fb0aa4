#![forbid(unsafe_code)]

//! Module-import rewriter
//!
//! Rewrites statements of the exact symmetric form `import X from "X"`,
//! where the bound name and the quoted path are identical and appear as a
//! key in the import layer. Asymmetric imports are left untouched; a
//! re-exported or aliased module is not this rewriter's business.

use crate::rewrite::Rewrite;
use crate::rules::RuleLayer;

/// Rewrites symmetric import statements per the import layer
#[derive(Debug)]
pub struct ImportRewriter<'a> {
    layer: &'a RuleLayer,
}

impl<'a> ImportRewriter<'a> {
    /// Creates a rewriter over the given import layer
    pub fn new(layer: &'a RuleLayer) -> Self {
        ImportRewriter { layer }
    }
}

impl Rewrite for ImportRewriter<'_> {
    fn rewrite(&self, text: &str) -> String {
        let mut out = text.to_string();

        for rule in self.layer.rules() {
            let needle = format!("import {} from \"{}\"", rule.from, rule.from);
            let replacement = format!("import {} from \"{}\"", rule.to, rule.to);
            out = out.replace(&needle, &replacement);
        }

        out
    }
}
