//! Penntree is a library to read Penn Treebank style bracketed parse trees.
//!
//! Trees like `(S (NP (NN dog)) (VP (VB runs)))` are read one at a time
//! from a token stream by a push-down automaton, so corpus files of any
//! size can be streamed.
//! Core functionality provided:
//! - Reader: [PennTreeReader](crate::penn::PennTreeReader) reads single
//!   trees, all trees, or lazily via an iterator. Malformed regions are
//!   skipped, a stream ending inside a tree is an error.
//! - Tokenizers: a byte level [PennTokenizer](crate::parser::PennTokenizer)
//!   over strings or files (in memory or buffered), or your own
//!   [Tokenizer](crate::parser::Tokenizer).
//! - Tree builder: You can use the provided tree models or
//!   provide your own [TreeBuilder](crate::model::TreeBuilder) implementation.
//! - Tree models:
//!   - [SimpleTree]: Each node stores its label as a [String].
//!   - [IndexedTree](crate::model::IndexedTree): Leaves store an
//!     [IndexedWord](crate::model::IndexedWord) with position and word.
//!   - Both use the arena pattern, see [crate::model] for more details.
//! - Normalization: a [TreeNormalizer](crate::model::TreeNormalizer) may
//!   rewrite labels, terminals and whole trees while reading.
//! - Writer: trees print back to bracketed notation, compact or indented.
//! - Detokenizer: [DictionaryDetokenizer](crate::detokenize::DictionaryDetokenizer)
//!   joins the words of a tree back into running text.
//!
//! # Usage patterns
//! 1. Several functions provide quick access to a reader with default
//!    settings. See [crate::penn].
//! 2. Configure a [PennTreeReader](crate::penn::PennTreeReader) for full
//!    control over token source, tree builder and normalization.
//!
//! ## Example Default Configuration
//! ```
//! use penntree::read_trees_str;
//!
//! let trees = read_trees_str("( (S (NP (NN dog)) (VP (VB runs))) )\n(X y)").unwrap();
//! assert_eq!(trees.len(), 2);
//! assert_eq!(trees[0].num_leaves(), 2);
//! ```
//!
//! ## Example Reader Configuration
//! ```
//! use penntree::model::{IndexedTreeBuilder, Label};
//! use penntree::parser::PennTokenizer;
//! use penntree::penn::PennTreeReader;
//!
//! let tokenizer = PennTokenizer::for_str("(S (NN dog) (VB runs))");
//! let reader = PennTreeReader::new(tokenizer, IndexedTreeBuilder::new());
//!
//! for tree in reader {
//!     let tree = tree?;
//!     let positions: Vec<Option<usize>> =
//!         tree.leaves().map(|leaf| leaf.label().and_then(Label::index)).collect();
//!     assert_eq!(positions, vec![Some(1), Some(2)]);
//! }
//! # Ok::<(), penntree::parser::ParsingError>(())
//! ```

pub mod detokenize;
pub mod model;
pub mod parser;
pub mod penn;

use crate::model::SimpleTree;
use crate::parser::parsing_error::ParsingError;
use std::path::Path;

// ============================================================================
// Quick Reading API
// ============================================================================
/// Reads all trees of a Penn Treebank file using default settings,
/// returning a vector of [SimpleTree].
///
/// See [`penn::read_trees_file`] for full documentation.
pub fn read_trees_file<P: AsRef<Path>>(path: P) -> Result<Vec<SimpleTree>, ParsingError> {
    penn::read_trees_file(path)
}

/// Reads all trees of a string using default settings,
/// returning a vector of [SimpleTree].
///
/// See [`penn::read_trees_str`] for full documentation.
pub fn read_trees_str<S: AsRef<str>>(penn: S) -> Result<Vec<SimpleTree>, ParsingError> {
    penn::read_trees_str(penn)
}

/// Reads the first tree of a string using default settings.
///
/// See [`penn::read_tree_str`] for full documentation.
pub fn read_tree_str<S: AsRef<str>>(penn: S) -> Result<Option<SimpleTree>, ParsingError> {
    penn::read_tree_str(penn)
}
