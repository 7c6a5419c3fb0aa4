#![forbid(unsafe_code)]

//! Text rewriters
//!
//! Each rewriter is a pure transformation from text to text, configured
//! by a rule table. They deliberately operate on raw text with literal
//! matching and a handful of positional guards; no parsing is attempted,
//! and rule authors choose sufficiently qualified strings to keep the
//! collateral-match risk acceptable.

pub mod contextual;
pub mod import;
pub mod layered;
pub mod tokens;

pub use contextual::{ContextKind, ContextualRewriter};
pub use import::ImportRewriter;
pub use layered::LayerCascade;
pub use tokens::TokenRewriter;

/// A single text transformation pass
///
/// Implementations never touch the filesystem; the stage orchestrator
/// reads, composes rewrites, and persists.
pub trait Rewrite {
    /// Produce the rewritten text
    fn rewrite(&self, text: &str) -> String;
}
