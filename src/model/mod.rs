//! Data model for parse trees.
//!
//! # Tree representation
//! Trees are represented by [`Tree<L>`], which uses the arena pattern to store
//! [Node]s referenced by [NodeIndex]. A node is either internal (built from
//! a bracket, optional label, ordered children) or a leaf (built from a
//! terminal token).
//!
//! Two concrete tree types are provided:
//!
//! | Type | Label type | Leaf capabilities |
//! |------|------------|-------------------|
//! | [SimpleTree] | [String] | none |
//! | [IndexedTree] | [IndexedWord] | position ([HasIndex]) and word ([HasWord]) |
//!
//! # Building trees
//! Trees are constructed during reading via the [TreeBuilder] trait, which
//! decouples the reader from concrete label types:
//!
//! - [SimpleTreeBuilder] → [SimpleTree]
//! - [IndexedTreeBuilder] → [IndexedTree]
//!
//! # Label handling
//! During reading, labels flow through:
//! 1. [TreeNormalizer] - rewrites nonterminals and terminals
//! 2. unescaping of `\*` and `\/`
//! 3. [TreeBuilder] - turns the text into a [Label]
//! 4. the reader - fills [HasIndex] and [HasWord] on leaf labels that support them

pub mod gen_tree_builder;
pub mod indexed_word;
pub mod label;
pub mod node;
pub mod tree;
pub mod tree_builder;
pub mod tree_normalizer;

// Tree (generic)
pub use node::Node;
pub use tree::NodeIndex;
pub use tree::Tree;
pub use tree_builder::TreeBuilder;
// Concrete trees and builders
pub use gen_tree_builder::GenTreeBuilder;
pub use gen_tree_builder::IndexedTreeBuilder;
pub use gen_tree_builder::SimpleTreeBuilder;
pub use tree::IndexedTree;
pub use tree::SimpleTree;
// Labels
pub use indexed_word::IndexedWord;
pub use label::HasIndex;
pub use label::HasWord;
pub use label::Label;
// Normalization
pub use tree_normalizer::IdentityNormalizer;
pub use tree_normalizer::TreeNormalizer;
