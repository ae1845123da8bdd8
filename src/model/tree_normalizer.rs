//! Hooks for rewriting labels and whole trees while reading.
//!
//! A [TreeNormalizer] is consulted by the reader at three points:
//! 1. [`normalize_nonterminal`](TreeNormalizer::normalize_nonterminal) - for
//!    each bracket label, before unescaping
//! 2. [`normalize_terminal`](TreeNormalizer::normalize_terminal) - for each
//!    terminal token, before unescaping
//! 3. [`normalize_whole_tree`](TreeNormalizer::normalize_whole_tree) - once
//!    per finished tree, before leaf indexing
//!
//! All methods default to the identity, so an implementation only overrides
//! what it rewrites. [IdentityNormalizer] overrides nothing and stands in
//! for "no normalizer".

use crate::model::label::Label;
use crate::model::tree::Tree;

/// Rewrites labels and trees during reading. See the [module docs](self).
pub trait TreeNormalizer<L: Label> {
    /// Rewrites a nonterminal label; `None` for an anonymous node.
    fn normalize_nonterminal(&self, label: Option<&str>) -> Option<String> {
        label.map(str::to_string)
    }

    /// Rewrites a terminal token.
    fn normalize_terminal(&self, token: &str) -> String {
        token.to_string()
    }

    /// Rewrites a finished tree; may return a tree with a different root,
    /// e.g. by stripping a wrapping node via [`Tree::subtree`].
    fn normalize_whole_tree(&self, tree: Tree<L>) -> Tree<L> {
        tree
    }
}

/// Normalizer leaving everything unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityNormalizer;

impl<L: Label> TreeNormalizer<L> for IdentityNormalizer {}
