//! Trait for constructing parse trees during reading.
//!
//! The [`TreeBuilder`] trait decouples the reader from how nodes and labels
//! are instantiated. The reader calls builder methods as it consumes
//! brackets and terminals; the builder decides which [Label] type the
//! nodes carry.
//!
//! # Built-in implementations
//! * [`SimpleTreeBuilder`](crate::model::SimpleTreeBuilder) - Builds
//!   [`SimpleTree`](crate::model::SimpleTree)s with [String] labels
//! * [`IndexedTreeBuilder`](crate::model::IndexedTreeBuilder) - Builds
//!   [`IndexedTree`](crate::model::IndexedTree)s with
//!   [`IndexedWord`](crate::model::IndexedWord) labels
//!
//! # Builder lifecycle
//! A builder constructs trees sequentially. A tree under construction may
//! be abandoned at any time (malformed input) by calling `init_next` again.
//!
//! ```text
//! Empty ──→ init_next() ──→ Building ──→ add_*/add_child ──→ finish_tree() ──→ Empty
//!   ↑                          │                                                │
//!   └──────── init_next() ←────┘ (abandon)                                      │
//!   └───────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::model::label::Label;
use crate::model::tree::{NodeIndex, Tree};

// =#========================================================================#=
// TREE BUILDER (trait)
// =#========================================================================T=
/// Abstraction for constructing trees during reading.
///
/// [PennTreeReader](crate::penn::PennTreeReader) is generic over this trait.
/// Nodes are created without children; the reader attaches children
/// afterwards via [`add_child`](Self::add_child), strictly left to right.
///
/// # Implementing this trait
/// The reader drives the lifecycle:
///
/// 1. [`init_next`](Self::init_next) -> prepare for a new tree, dropping any
///    partially built one
/// 2. [`add_internal`](Self::add_internal), [`add_leaf`](Self::add_leaf),
///    [`add_child`](Self::add_child) -> build structure
/// 3. [`label_mut`](Self::label_mut) -> the reader tags leaf labels
/// 4. [`finish_tree`](Self::finish_tree) -> finalize and return the tree
pub trait TreeBuilder {
    /// The label type of the nodes this builder creates.
    type Label: Label;

    /// Prepares the builder for constructing a new tree,
    /// discarding any tree under construction.
    fn init_next(&mut self);

    /// Adds an internal node without children.
    ///
    /// # Arguments
    /// * `label` - Node label, `None` for an anonymous node
    fn add_internal(&mut self, label: Option<String>) -> NodeIndex;

    /// Adds a leaf built from the (normalized, unescaped) terminal `text`.
    fn add_leaf(&mut self, text: String) -> NodeIndex;

    /// Attaches `child` as last child of `parent`.
    fn add_child(&mut self, parent: NodeIndex, child: NodeIndex);

    /// Returns the label of a node of the tree under construction.
    fn label(&self, index: NodeIndex) -> Option<&Self::Label>;

    /// Returns the label of a node of the tree under construction, mutably.
    fn label_mut(&mut self, index: NodeIndex) -> Option<&mut Self::Label>;

    /// Finalizes the tree rooted at `root` and returns it.
    ///
    /// Transitions builder to the empty state. Returns `None` if no tree
    /// was under construction.
    fn finish_tree(&mut self, root: NodeIndex) -> Option<Tree<Self::Label>>;
}
