use crate::model::indexed_word::IndexedWord;
use crate::model::label::Label;
use crate::model::tree::{NodeIndex, Tree};
use crate::model::tree_builder::TreeBuilder;

/// Default guess for number of nodes in a tree, to pre-allocate the arena.
const DEFAULT_NUM_NODES_GUESS: usize = 64;

/// Builds [`Tree<L>`] for any [Label] type `L`, creating labels with
/// [`Label::from_value`].
#[derive(Debug)]
pub struct GenTreeBuilder<L> {
    current_tree: Option<Tree<L>>,
    capacity: usize,
}

/// Builder of [SimpleTree](crate::model::SimpleTree)s.
pub type SimpleTreeBuilder = GenTreeBuilder<String>;

/// Builder of [IndexedTree](crate::model::IndexedTree)s.
pub type IndexedTreeBuilder = GenTreeBuilder<IndexedWord>;

impl<L: Label> GenTreeBuilder<L> {
    pub fn new() -> Self {
        Self {
            current_tree: None,
            capacity: DEFAULT_NUM_NODES_GUESS,
        }
    }

    fn tree(&mut self) -> &mut Tree<L> {
        let capacity = self.capacity;
        self.current_tree.get_or_insert_with(|| Tree::with_capacity(capacity))
    }
}

impl<L: Label> Default for GenTreeBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> TreeBuilder for GenTreeBuilder<L> {
    type Label = L;

    fn init_next(&mut self) {
        self.current_tree = Some(Tree::with_capacity(self.capacity));
    }

    fn add_internal(&mut self, label: Option<String>) -> NodeIndex {
        self.tree().add_internal(label.map(L::from_value))
    }

    fn add_leaf(&mut self, text: String) -> NodeIndex {
        self.tree().add_leaf(L::from_value(text))
    }

    fn add_child(&mut self, parent: NodeIndex, child: NodeIndex) {
        self.tree().add_child(parent, child);
    }

    fn label(&self, index: NodeIndex) -> Option<&L> {
        self.current_tree.as_ref()?.node(index).label()
    }

    fn label_mut(&mut self, index: NodeIndex) -> Option<&mut L> {
        self.current_tree.as_mut()?.node_mut(index).label_mut()
    }

    fn finish_tree(&mut self, root: NodeIndex) -> Option<Tree<L>> {
        let mut tree = self.current_tree.take()?;
        tree.set_root(root);
        // Remember size of this tree as allocation hint for the next one
        self.capacity = self.capacity.max(tree.num_nodes());
        Some(tree)
    }
}
