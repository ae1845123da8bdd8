//! Penn Treebank bracketed notation writing.

use crate::model::label::Label;
use crate::model::tree::{NodeIndex, Tree};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Estimated characters per node, to pre-allocate output strings
const CHARS_PER_NODE_GUESS: usize = 8;

/// Indentation per tree level in [PennStyle::Pretty]
const INDENT: &str = "  ";

/// Layout of the bracketed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PennStyle {
    /// Whole tree on one line, e.g. `(S (NP (NN dog)) (VP (VB runs)))`
    Compact,
    /// One phrasal node per line, indented by depth; preterminals stay on
    /// one line with their word
    Pretty,
}

/// Writes given trees to a file, each tree followed by a newline.
///
/// # Errors
/// Returns an I/O error if writing fails.
///
/// # Example
/// ```ignore
/// use penntree::penn::{write_penn_file, PennStyle};
/// use std::fs::File;
///
/// let file = File::create("trees.mrg")?;
/// write_penn_file(file, &your_trees, PennStyle::Pretty)?;
/// ```
pub fn write_penn_file<L: Label>(file: File, trees: &[Tree<L>], style: PennStyle) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    for tree in trees {
        writer.write_all(to_penn(tree, style).as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Returns the bracketed representation of a tree.
///
/// Unlabelled nodes are written as a bare `(` followed by their children,
/// e.g. `( (S (NN dog)))`. Labels are written as stored, so escapes removed
/// by the reader are not restored.
///
/// Returns an empty string if the tree has no root.
///
/// # Example
/// ```
/// use penntree::model::SimpleTree;
/// use penntree::penn::{to_penn, PennStyle};
///
/// let mut tree = SimpleTree::new();
/// let np = tree.add_internal(Some("NP".to_string()));
/// let nn = tree.add_internal(Some("NN".to_string()));
/// let dog = tree.add_leaf("dog".to_string());
/// tree.add_child(nn, dog);
/// tree.add_child(np, nn);
/// tree.set_root(np);
///
/// assert_eq!(to_penn(&tree, PennStyle::Compact), "(NP (NN dog))");
/// assert_eq!(to_penn(&tree, PennStyle::Pretty), "(NP\n  (NN dog))");
/// ```
pub fn to_penn<L: Label>(tree: &Tree<L>, style: PennStyle) -> String {
    if !tree.is_root_set() {
        return String::new();
    }

    let mut penn = String::with_capacity(tree.num_nodes() * CHARS_PER_NODE_GUESS);
    write_penn(tree, style, &mut penn);
    penn
}

/// Pending output while walking the tree.
enum Step {
    /// Write the node at the given depth, opening its bracket
    Node(NodeIndex, usize),
    /// Separate siblings on the same line
    Space,
    /// Separate siblings by a line break, indented to the given depth
    Break(usize),
    /// Close the bracket of a node
    Close,
}

/// Walks the tree with an explicit stack; depth is bounded by memory only.
fn write_penn<L: Label>(tree: &Tree<L>, style: PennStyle, penn: &mut String) {
    let mut steps = vec![Step::Node(tree.root_index(), 0)];

    while let Some(step) = steps.pop() {
        match step {
            Step::Space => penn.push(' '),
            Step::Break(depth) => {
                penn.push('\n');
                for _ in 0..depth {
                    penn.push_str(INDENT);
                }
            }
            Step::Close => penn.push(')'),
            Step::Node(index, depth) => {
                let node = tree.node(index);
                if node.is_leaf() {
                    penn.push_str(node.value().unwrap_or_default());
                    continue;
                }

                penn.push('(');
                if let Some(value) = node.value() {
                    penn.push_str(value);
                }

                // Preterminals stay on one line
                let inline = style == PennStyle::Compact || tree.is_preterminal(index);
                steps.push(Step::Close);
                for &child in node.children().iter().rev() {
                    steps.push(Step::Node(child, depth + 1));
                    steps.push(if inline { Step::Space } else { Step::Break(depth + 1) });
                }
            }
        }
    }
}
