//! Node of a parse tree.

use crate::model::label::Label;
use crate::model::tree::NodeIndex;

// =#========================================================================#=
// NODE
// =#========================================================================$=
/// Represents a node in a parse tree, stored in the arena of a
/// [Tree](crate::model::Tree).
///
/// A node is either:
/// - **Internal**: built from a bracketed subexpression; has an optional
///   label (absent for an anonymous wrapper such as the outer `( (S ...))`)
///   and zero or more children
/// - **Leaf**: built from a terminal token; always has a label, never children
///
/// # Invariants
/// - `index` is the position of this node in the arena
/// - `children` are in left-to-right input order
/// - a leaf has no children
#[derive(Debug, Clone, PartialEq)]
pub struct Node<L> {
    /// Index of this node in the tree arena
    index: NodeIndex,
    /// Label; `None` only for anonymous internal nodes
    label: Option<L>,
    /// Index of the parent node; `None` for the root and while detached
    parent: Option<NodeIndex>,
    /// Indices of the children, left to right
    children: Vec<NodeIndex>,
    /// Whether this node was built from a terminal token
    leaf: bool,
}

impl<L: Label> Node<L> {
    /// Creates a new internal node without children.
    pub fn new_internal(index: NodeIndex, label: Option<L>) -> Self {
        Self {
            index,
            label,
            parent: None,
            children: Vec::new(),
            leaf: false,
        }
    }

    /// Creates a new leaf.
    pub fn new_leaf(index: NodeIndex, label: L) -> Self {
        Self {
            index,
            label: Some(label),
            parent: None,
            children: Vec::new(),
            leaf: true,
        }
    }

    pub fn index(&self) -> NodeIndex {
        self.index
    }

    pub fn label(&self) -> Option<&L> {
        self.label.as_ref()
    }

    pub fn label_mut(&mut self) -> Option<&mut L> {
        self.label.as_mut()
    }

    /// Returns the text value of the label, `None` for anonymous nodes.
    pub fn value(&self) -> Option<&str> {
        self.label.as_ref().map(Label::value)
    }

    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.leaf
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeIndex>) {
        self.parent = parent;
    }

    /// Appends a child; the caller keeps the child's parent in sync.
    ///
    /// # Panics
    /// Panics if this node is a leaf.
    pub(crate) fn push_child(&mut self, child: NodeIndex) {
        assert!(!self.leaf, "a leaf cannot have children");
        self.children.push(child);
    }
}
