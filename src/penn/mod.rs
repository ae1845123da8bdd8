//! Penn Treebank reader and writer for bracketed parse trees.
//!
//! This module provides [`PennTreeReader`] to read Penn Treebank style
//! trees from a token stream, one tree at a time. The reader uses a
//! [`TreeBuilder`](crate::model::TreeBuilder) internally, so the tree
//! representation is up to the caller.
//!
//! # Quick API
//! For simple use cases with default settings:
//! * [`read_trees_file`] - reads all trees of a file as [`SimpleTree`]s
//! * [`read_trees_str`] - reads all trees of a string as [`SimpleTree`]s
//! * [`read_tree_str`] - reads the first tree of a string
//!
//! # Full API
//! For more control, configure a [`PennTreeReader`] with a
//! [`Tokenizer`](crate::parser::Tokenizer), a tree builder, and optionally
//! a [`TreeNormalizer`](crate::model::TreeNormalizer):
//! * [`PennTreeReader::read_tree`] - read the next tree
//! * [`PennTreeReader::read_all`] - read all trees until end of stream
//! * [`PennTreeReader::into_iter`] - obtain an iterator over trees
//!
//! # Format
//! * `tree ::= '(' [label] node* ')'`
//! * `node ::= tree | terminal`
//!
//! Furthermore:
//! * Brackets are tokens of their own, labels and terminals are separated
//!   by whitespace (including newlines)
//! * A tree without label directly followed by `(` is an anonymous wrapper,
//!   as in `( (S ...))`
//! * `\*` and `\/` are escapes for `*` and `/`
//! * Files may start with a legacy header of `*x*x*x` prefixed tokens

mod defs;
pub mod reader;
pub mod writer;

pub use self::reader::{PennTreeIterator, PennTreeReader};
pub use self::writer::{PennStyle, to_penn, write_penn_file};

use crate::model::SimpleTree;
use crate::parser::ParsingError;
use std::path::Path;

// ============================================================================
// QUICK READING API (pub)
// ============================================================================
/// Reads all trees of a Penn Treebank file as [`SimpleTree`]s.
///
/// The file is streamed through a buffer, so large corpus files are fine.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Returns
/// * `Vec<SimpleTree>` - All trees of the file
/// * [`ParsingError`] - If the file cannot be read or ends inside a tree
///
/// # Example
/// ```ignore
/// use penntree::penn::read_trees_file;
///
/// let trees = read_trees_file("wsj_0001.mrg")?;
/// println!("Read {} trees", trees.len());
/// ```
pub fn read_trees_file<P: AsRef<Path>>(path: P) -> Result<Vec<SimpleTree>, ParsingError> {
    let mut reader = PennTreeReader::for_file(path)?;
    let trees = reader.read_all()?;
    reader.close();
    Ok(trees)
}

/// Reads all trees of a string as [`SimpleTree`]s.
///
/// # Example
/// ```
/// use penntree::penn::read_trees_str;
///
/// let trees = read_trees_str("(A x) (B y)").unwrap();
/// assert_eq!(trees.len(), 2);
/// assert_eq!(trees[1].root().value(), Some("B"));
/// ```
pub fn read_trees_str<S: AsRef<str>>(penn: S) -> Result<Vec<SimpleTree>, ParsingError> {
    PennTreeReader::for_str(penn.as_ref()).read_all()
}

/// Reads the first tree of a string.
///
/// # Returns
/// * `Some(SimpleTree)` - The first tree
/// * `None` - If the string holds no tree
/// * [`ParsingError`] - If the string ends inside the first tree
///
/// # Example
/// ```
/// use penntree::penn::read_tree_str;
///
/// let tree = read_tree_str("( (S (NN dog)))").unwrap().unwrap();
/// assert_eq!(tree.root().value(), None);
/// assert_eq!(tree.yield_words(), vec!["dog"]);
/// ```
pub fn read_tree_str<S: AsRef<str>>(penn: S) -> Result<Option<SimpleTree>, ParsingError> {
    PennTreeReader::for_str(penn.as_ref()).read_tree()
}
