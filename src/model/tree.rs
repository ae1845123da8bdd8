//! Provides the generic parse tree representation.
//!
//! * [`Tree<L>`] - Parse tree using the arena pattern, generic over its
//!   node [Label] type
//! * [SimpleTree] as realization with [String] labels
//! * [IndexedTree] as realization with [IndexedWord] labels
//! * [NodeIndex] as type used to index nodes in a tree

use crate::model::indexed_word::IndexedWord;
use crate::model::label::Label;
use crate::model::node::Node;
use crate::penn::writer::{PennStyle, to_penn};
use std::fmt;

/// Index of a node in a tree (arena).
pub type NodeIndex = usize;

/// *During construction only*, index for unset root.
const NO_ROOT_SET_INDEX: NodeIndex = usize::MAX;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A parse tree represented using the arena pattern on [Node].
///
/// Nodes are stored in a contiguous vector and referenced by [NodeIndex];
/// children always point away from the root, so no reference cycles exist.
///
/// Generic over `L`, the [Label] type of its nodes.
///
/// # Structure
/// - All nodes (internal and leaves) are stored in the arena.
/// - Index of root is maintained.
/// - Arena order is construction order, not tree order; use
///   [`pre_order_iter`](Self::pre_order_iter) or [`leaves`](Self::leaves)
///   for traversal.
/// - Nodes not reachable from the root may remain in the arena after
///   construction was abandoned; [`subtree`](Self::subtree) yields a
///   compact copy.
///
/// # Construction
/// Add nodes with [`add_internal`](Self::add_internal) and
/// [`add_leaf`](Self::add_leaf), connect them with
/// [`add_child`](Self::add_child), then mark the root with
/// [`set_root`](Self::set_root). Check with [`is_valid`](Self::is_valid).
#[derive(Debug, Clone)]
pub struct Tree<L> {
    /// Nodes of this tree (arena pattern)
    nodes: Vec<Node<L>>,

    /// Index of the root of this tree
    root_index: NodeIndex,
}

// Convenient type aliases
/// Tree with plain [String] labels.
pub type SimpleTree = Tree<String>;

/// Tree with [IndexedWord] labels, whose leaves carry positions and words.
pub type IndexedTree = Tree<IndexedWord>;

// ============================================================================
// New, Construction, Getters (pub)
// ============================================================================
impl<L: Label> Tree<L> {
    /// Creates a new, empty tree.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new, empty tree with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            nodes: Vec::with_capacity(capacity),
            root_index: NO_ROOT_SET_INDEX,
        }
    }

    /// Adds an internal node without children and returns its index.
    ///
    /// # Arguments
    /// * `label` - Label of the node, `None` for an anonymous node
    pub fn add_internal(&mut self, label: Option<L>) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(Node::new_internal(index, label));
        index
    }

    /// Adds a leaf and returns its index.
    pub fn add_leaf(&mut self, label: L) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(Node::new_leaf(index, label));
        index
    }

    /// Appends `child` as last child of `parent`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds or `parent` is a leaf.
    pub fn add_child(&mut self, parent: NodeIndex, child: NodeIndex) {
        self.nodes[parent].push_child(child);
        self.nodes[child].set_parent(Some(parent));
    }

    /// Marks the node at `index` as root of this tree.
    pub fn set_root(&mut self, index: NodeIndex) {
        self.root_index = index;
    }

    /// Returns whether root of tree has been set.
    pub fn is_root_set(&self) -> bool {
        self.root_index != NO_ROOT_SET_INDEX
    }

    /// Returns a reference to the root node.
    ///
    /// # Panics
    /// Panics if the root hasn't been set and thus tree hasn't been fully constructed yet.
    pub fn root(&self) -> &Node<L> {
        &self[self.root_index]
    }

    /// Returns the index of the root.
    pub fn root_index(&self) -> NodeIndex {
        self.root_index
    }

    /// Returns a reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: NodeIndex) -> &Node<L> {
        &self[index]
    }

    /// Returns a mutable reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node_mut(&mut self, index: NodeIndex) -> &mut Node<L> {
        &mut self.nodes[index]
    }

    /// Returns references to the children of the node at `index`, left to right.
    pub fn children_of(&self, index: NodeIndex) -> impl Iterator<Item = &Node<L>> {
        self[index].children().iter().map(|&c| &self.nodes[c])
    }

    /// Returns the number of nodes stored in the arena.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of leaves reachable from the root.
    pub fn num_leaves(&self) -> usize {
        self.leaves().count()
    }

    /// Returns whether the node at `index` is internal and all its
    /// children are leaves, e.g. `(NN dog)`.
    pub fn is_preterminal(&self, index: NodeIndex) -> bool {
        let node = &self[index];
        !node.is_leaf()
            && node.num_children() > 0
            && node.children().iter().all(|&c| self.nodes[c].is_leaf())
    }

    /// Returns the depth of this tree: `0` for a lone root,
    /// otherwise the longest number of edges from the root to any node.
    pub fn depth(&self) -> usize {
        if !self.is_root_set() {
            return 0;
        }

        let mut max_depth = 0;
        let mut stack = vec![(self.root_index, 0)];
        while let Some((index, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for &child in self[index].children() {
                stack.push((child, depth + 1));
            }
        }
        max_depth
    }
}

impl<L: Label> Default for Tree<L> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Traversal, leaf indexing, subtrees (pub)
// ============================================================================
impl<L: Label> Tree<L> {
    /// Returns an iterator over the nodes reachable from the root in pre-order
    /// (parent before children, children left to right).
    ///
    /// Yields nothing if the root is not set.
    pub fn pre_order_iter(&self) -> PreOrderIter<'_, L> {
        let stack = if self.is_root_set() {
            vec![self.root_index]
        } else {
            Vec::new()
        };
        PreOrderIter { tree: self, stack }
    }

    /// Returns an iterator over the leaves, left to right.
    pub fn leaves(&self) -> impl Iterator<Item = &Node<L>> {
        self.pre_order_iter().filter(|node| node.is_leaf())
    }

    /// Returns the label values of the leaves, left to right.
    pub fn yield_words(&self) -> Vec<&str> {
        self.leaves().filter_map(Node::value).collect()
    }

    /// Assigns 1-based positions to all leaves, left to right.
    ///
    /// The position advances for every leaf, but only labels offering the
    /// [HasIndex](crate::model::HasIndex) capability store it.
    /// Existing positions are overwritten.
    pub fn index_leaves(&mut self) {
        let leaf_indices: Vec<NodeIndex> = self.leaves().map(Node::index).collect();

        for (position, leaf_index) in leaf_indices.into_iter().enumerate() {
            if let Some(has_index) = self.nodes[leaf_index]
                .label_mut()
                .and_then(|label| label.as_has_index_mut())
            {
                has_index.set_index(position + 1);
            }
        }
    }

    /// Returns a fresh, compact tree holding a copy of the subtree rooted at `index`.
    ///
    /// Used e.g. by whole-tree normalizers to strip a wrapping root.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn subtree(&self, index: NodeIndex) -> Tree<L> {
        let mut subtree = Tree::with_capacity(self.nodes.len());

        // Nodes still to copy, with the index of their copied parent
        let mut pending: Vec<(NodeIndex, Option<NodeIndex>)> = vec![(index, None)];
        while let Some((original, new_parent)) = pending.pop() {
            let node = &self[original];
            let copy = if node.is_leaf() {
                // Leaves always carry a label
                let label = node.label().cloned().unwrap_or_else(|| L::from_value(String::new()));
                subtree.add_leaf(label)
            } else {
                subtree.add_internal(node.label().cloned())
            };

            match new_parent {
                Some(parent) => subtree.add_child(parent, copy),
                None => subtree.set_root(copy),
            }
            for &child in node.children().iter().rev() {
                pending.push((child, Some(copy)));
            }
        }

        subtree
    }

    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Root index is set, valid, and has no parent
    /// - All node indices match their position in the arena
    /// - All child indices are valid and point back to correct parent
    /// - Leaves have a label and no children
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        if self.root_index >= self.nodes.len() {
            return false;
        }

        if self[self.root_index].parent().is_some() {
            return false;
        }

        for (index, node) in self.nodes.iter().enumerate() {
            if node.index() != index {
                return false;
            }

            if node.is_leaf() && (node.label().is_none() || node.num_children() > 0) {
                return false;
            }

            for &child in node.children() {
                if child >= self.nodes.len() || self.nodes[child].parent() != Some(index) {
                    return false;
                }
            }
        }

        true
    }
}

impl<L> std::ops::Index<NodeIndex> for Tree<L> {
    type Output = Node<L>;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

impl<L> std::ops::IndexMut<NodeIndex> for Tree<L> {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[index]
    }
}

impl<L: Label> fmt::Display for Tree<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_penn(self, PennStyle::Compact))
    }
}

// =#========================================================================#=
// PRE-ORDER ITERATOR
// =#========================================================================$=
/// Iterator over the nodes of a [Tree] in pre-order.
///
/// Created by [`Tree::pre_order_iter`].
pub struct PreOrderIter<'a, L> {
    tree: &'a Tree<L>,
    stack: Vec<NodeIndex>,
}

impl<'a, L: Label> Iterator for PreOrderIter<'a, L> {
    type Item = &'a Node<L>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree[index];
        // Reverse, so the leftmost child is popped first
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
