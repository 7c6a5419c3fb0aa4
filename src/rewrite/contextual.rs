#![forbid(unsafe_code)]

//! Contextual attribute rewriter
//!
//! Renames global symbols only when they appear in one of four syntactic
//! roles, recognized positionally without a parser. For each symbol the
//! four context kinds run in fixed order, each as a full pass over the
//! possibly-already-modified text; a later kind acting on text produced
//! by an earlier kind for the same symbol is intentional layering.
//!
//! The look-behind/look-ahead guards of the role patterns are expressed
//! as explicit boundary checks around literal occurrences; matched
//! context characters are never consumed, so adjacent matches cannot
//! shadow each other.

use crate::rewrite::Rewrite;
use crate::rules::GlobalRenames;

/// The syntactic role a contextual rename is allowed to match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    /// `.symbol` — member access; unconditional, all occurrences
    MemberAccess,
    /// whitespace, then `symbol:` — declaration or annotation
    Declaration,
    /// whitespace, then `symbol =` — assignment target
    Assignment,
    /// whitespace or `(`, then symbol, then a non-word character
    BareReference,
}

impl ContextKind {
    /// The fixed application order for one symbol's pass
    pub const ORDERED: [ContextKind; 4] = [
        ContextKind::MemberAccess,
        ContextKind::Declaration,
        ContextKind::Assignment,
        ContextKind::BareReference,
    ];

    /// Whether an occurrence with the given surroundings plays this role.
    /// `before` is the character preceding the occurrence, `after` the
    /// remainder of the text following it.
    fn matches(self, before: Option<char>, after: &str) -> bool {
        match self {
            ContextKind::MemberAccess => before == Some('.'),
            ContextKind::Declaration => {
                before.is_some_and(char::is_whitespace) && after.starts_with(':')
            }
            ContextKind::Assignment => {
                before.is_some_and(char::is_whitespace) && after.starts_with(" =")
            }
            ContextKind::BareReference => {
                (before.is_some_and(char::is_whitespace) || before == Some('('))
                    && after.chars().next().is_some_and(|c| !is_word_char(c))
            }
        }
    }
}

/// Word characters in the sense of the role patterns (ASCII `\w`)
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// One full-text pass replacing every occurrence of `symbol` that plays
/// the given role. Context characters stay in place; only the symbol
/// text is swapped.
fn apply_kind(kind: ContextKind, text: &str, symbol: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied_up_to = 0;

    for (idx, matched) in text.match_indices(symbol) {
        let before = text[..idx].chars().next_back();
        let after = &text[idx + matched.len()..];

        if kind.matches(before, after) {
            out.push_str(&text[copied_up_to..idx]);
            out.push_str(replacement);
            copied_up_to = idx + matched.len();
        }
    }

    out.push_str(&text[copied_up_to..]);
    out
}

/// Applies the globals table across all context kinds
#[derive(Debug)]
pub struct ContextualRewriter<'a> {
    table: &'a GlobalRenames,
}

impl<'a> ContextualRewriter<'a> {
    /// Creates a rewriter over the given globals table
    pub fn new(table: &'a GlobalRenames) -> Self {
        ContextualRewriter { table }
    }
}

impl Rewrite for ContextualRewriter<'_> {
    fn rewrite(&self, text: &str) -> String {
        let mut out = text.to_string();

        for rule in self.table.rules() {
            for kind in ContextKind::ORDERED {
                out = apply_kind(kind, &out, &rule.symbol, &rule.replacement);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite_with(table_json: &str, input: &str) -> String {
        let table = GlobalRenames::from_json(table_json).unwrap();
        ContextualRewriter::new(&table).rewrite(input)
    }

    #[test]
    fn test_member_access() {
        assert_eq!(rewrite_with(r#"{"x": "y"}"#, "a.x.b"), "a.y.b");
    }

    #[test]
    fn test_member_access_is_unconditional() {
        // The member-access role has no trailing guard; `.x` inside a
        // longer name still matches. Accepted risk, not a defect.
        assert_eq!(rewrite_with(r#"{"x": "y"}"#, "a.xy"), "a.yy");
    }

    #[test]
    fn test_declaration() {
        assert_eq!(
            rewrite_with(r#"{"x": "y"}"#, "let v = { x: number };"),
            "let v = { y: number };"
        );
    }

    #[test]
    fn test_declaration_requires_leading_whitespace() {
        assert_eq!(rewrite_with(r#"{"x": "y"}"#, "box: 1"), "box: 1");
    }

    #[test]
    fn test_assignment() {
        assert_eq!(rewrite_with(r#"{"x": "y"}"#, "  x = 1"), "  y = 1");
    }

    #[test]
    fn test_bare_reference() {
        assert_eq!(rewrite_with(r#"{"x": "y"}"#, "f( x );"), "f( y );");
        assert_eq!(rewrite_with(r#"{"x": "y"}"#, "f(x)"), "f(y)");
        assert_eq!(rewrite_with(r#"{"x": "y"}"#, "do x;"), "do y;");
    }

    #[test]
    fn test_mid_word_occurrence_is_untouched() {
        assert_eq!(rewrite_with(r#"{"x": "y"}"#, "box"), "box");
        assert_eq!(rewrite_with(r#"{"x": "y"}"#, "xylophone"), "xylophone");
    }

    #[test]
    fn test_end_of_text_is_not_a_bare_reference() {
        // The role needs a following non-word character; end of input
        // does not qualify.
        assert_eq!(rewrite_with(r#"{"x": "y"}"#, "call x"), "call x");
    }

    #[test]
    fn test_adjacent_bare_references_both_match() {
        // Guards are checks, not consumed characters, so a shared space
        // between two occurrences serves both.
        assert_eq!(rewrite_with(r#"{"x": "y"}"#, "( x x )"), "( y y )");
    }

    #[test]
    fn test_kinds_layer_within_one_symbol_pass() {
        // Declaration and assignment both fire during the same symbol's
        // pass over progressively rewritten text.
        assert_eq!(
            rewrite_with(r#"{"cfg": "config"}"#, "obj.cfg = { cfg: cfg.value };"),
            "obj.config = { config: config.value };"
        );
    }

    #[test]
    fn test_symbols_apply_in_table_order() {
        // More specific symbol listed first wins; the shorter symbol no
        // longer finds its substring afterwards.
        assert_eq!(
            rewrite_with(
                r#"{"app_config_ex": "AppConfigEx", "app_config": "AppConfig"}"#,
                "use( app_config_ex );"
            ),
            "use( AppConfigEx );"
        );
    }

    #[test]
    fn test_later_symbol_pass_sees_earlier_output() {
        // A replacement that coincides with a later symbol's name gets
        // rewritten again by that symbol's own pass. Table authors pick
        // replacements that do not re-trigger; pin the mechanism anyway.
        assert_eq!(rewrite_with(r#"{"a": "b", "b": "c"}"#, "( a )"), "( c )");
    }

    #[test]
    fn test_empty_table_is_identity() {
        assert_eq!(rewrite_with("{}", " x = 1"), " x = 1");
    }
}
