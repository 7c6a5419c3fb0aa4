#![forbid(unsafe_code)]

//! Literal token rewriter
//!
//! Unconditional substring replacement for non-code asset text. Every
//! pair applies in order over all occurrences, regardless of prior
//! pairs' effects. The literals are path-like tokens unique enough that
//! context checks would add nothing.

use crate::rewrite::Rewrite;
use crate::rules::TokenRule;

/// Replaces fixed literal tokens in asset text
#[derive(Debug)]
pub struct TokenRewriter<'a> {
    pairs: &'a [TokenRule],
}

impl<'a> TokenRewriter<'a> {
    /// Creates a rewriter over the given pairs, in order
    pub fn new(pairs: &'a [TokenRule]) -> Self {
        TokenRewriter { pairs }
    }
}

impl Rewrite for TokenRewriter<'_> {
    fn rewrite(&self, text: &str) -> String {
        let mut out = text.to_string();

        for pair in self.pairs {
            out = out.replace(&pair.from, &pair.to);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_every_occurrence_of_every_pair() {
        let pairs = [
            TokenRule::new("audio_base/unit", "AudioBase/Unit"),
            TokenRule::new("guide_step_base", "GuideStepBase"),
        ];
        let rewriter = TokenRewriter::new(&pairs);

        let input = "audio_base/unit guide_step_base audio_base/unit";
        assert_eq!(
            rewriter.rewrite(input),
            "AudioBase/Unit GuideStepBase AudioBase/Unit"
        );
    }

    #[test]
    fn test_second_pass_is_a_noop() {
        let pairs = [TokenRule::new("view_base/animation", "ViewBase/Animation")];
        let rewriter = TokenRewriter::new(&pairs);

        let once = rewriter.rewrite("node: view_base/animation");
        let twice = rewriter.rewrite(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_context_checks() {
        let pairs = [TokenRule::new("unit", "Unit")];
        let rewriter = TokenRewriter::new(&pairs);

        // Embedded occurrences match too; callers choose literals that
        // cannot collide in the asset formats they run against.
        assert_eq!(rewriter.rewrite("subunit"), "subUnit");
    }

    #[test]
    fn test_empty_pair_list_is_identity() {
        let rewriter = TokenRewriter::new(&[]);
        assert_eq!(rewriter.rewrite("unchanged"), "unchanged");
    }
}
