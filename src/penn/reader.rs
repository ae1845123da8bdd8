//! Push-down automaton reading Penn Treebank trees one at a time.
//!
//! This module provides the [PennTreeReader] struct, which reads single
//! trees or all trees of a token stream, as well as lazy reading via a
//! [PennTreeIterator].

use crate::model::label::Label;
use crate::model::tree::{NodeIndex, Tree};
use crate::model::tree_builder::TreeBuilder;
use crate::model::tree_normalizer::{IdentityNormalizer, TreeNormalizer};
use crate::model::SimpleTreeBuilder;
use crate::parser::buffered_byte_source::BufferedByteSource;
use crate::parser::in_memory_byte_source::InMemoryByteSource;
use crate::parser::parsing_error::ParsingError;
use crate::parser::tokenizer::{LEFT_PAREN, PennTokenizer, RIGHT_PAREN, Tokenizer};
use crate::parser::utils::{starts_with, unescape_token};
use crate::penn::defs::{LEGACY_HEADER_PREFIX, LEGACY_HEADER_TOKEN_COUNT};
use log::{debug, trace};
use std::fmt;
use std::path::Path;

// =#========================================================================#=
// ATTEMPT OUTCOME
// =#========================================================================$=
/// Outcome of one attempt to read a tree.
#[derive(Debug, PartialEq)]
enum Attempt {
    /// A tree was closed; its root node.
    Completed(NodeIndex),
    /// Input was malformed; the partial tree is dropped and reading resumes.
    Malformed(MalformedInput),
    /// Token stream ended while a tree was open.
    ExhaustedMidTree,
    /// Token stream ended before any tree was opened.
    EndOfStream,
}

/// Kinds of malformed input skipped by the reader.
#[derive(Debug, PartialEq)]
enum MalformedInput {
    UnmatchedCloseBracket,
    TokenOutsideTree(String),
}

impl fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedInput::UnmatchedCloseBracket => write!(f, "extra non-matching right parenthesis"),
            MalformedInput::TokenOutsideTree(token) => write!(f, "extra token not in a tree: {token}"),
        }
    }
}

// =#========================================================================#=
// PENN TREE READER
// =#========================================================================$=
/// Reader for Penn Treebank style bracketed trees, e.g.
/// `(S (NP (NN dog)) (VP (VB runs)))`.
///
/// Generic over the [Tokenizer] (token source), the [TreeBuilder]
/// (construction) and the [TreeNormalizer] (label rewriting).
///
/// The reader is a push-down automaton over the token stream: `(` opens a
/// node (labelled by the next token unless that is another `(`), `)` closes
/// the innermost open node, any other token becomes a leaf of the innermost
/// open node. Additional unlabelled brackets around a tree (an anonymous
/// root, as in `( (S ...))`) are supported.
///
/// # Malformed input
/// * An empty bracket pair `()` is skipped.
/// * An unmatched `)`, or a token outside any bracket, drops the tree read
///   so far; reading resumes with the next token.
/// * If the stream ends while a tree is open, reading fails with
///   [UnexpectedEndOfInput](crate::parser::ParsingErrorType::UnexpectedEndOfInput).
///
/// # Escapes and leaf positions
/// `\*` and `\/` in labels and terminals are replaced by `*` and `/`.
/// Leaves whose label supports it get their 1-based position in the tree
/// and their word text (see [HasIndex](crate::model::HasIndex),
/// [HasWord](crate::model::HasWord)).
///
/// # Legacy headers
/// If the stream starts with a token prefixed by `*x*x*x`, tokens are
/// skipped until four such tokens have been seen.
///
/// # Example
/// ```
/// use penntree::penn::PennTreeReader;
///
/// let mut reader = PennTreeReader::for_str("(S (NP (NN dog)) (VP (VB runs)))");
/// let tree = reader.read_tree().unwrap().unwrap();
/// assert_eq!(tree.root().value(), Some("S"));
/// assert_eq!(tree.yield_words(), vec!["dog", "runs"]);
/// assert!(reader.read_tree().unwrap().is_none());
/// ```
pub struct PennTreeReader<T, B, N = IdentityNormalizer>
where
    T: Tokenizer,
    B: TreeBuilder,
    N: TreeNormalizer<B::Label>,
{
    tokenizer: T,
    tree_builder: B,
    normalizer: N,
    /// Innermost open node of the current attempt
    current_tree: Option<NodeIndex>,
    /// Open ancestors of the current attempt
    stack: Vec<NodeIndex>,
}

// ============================================================================
// Construction & Configuration, Deconstruction (pub)
// ============================================================================
impl<T, B> PennTreeReader<T, B, IdentityNormalizer>
where
    T: Tokenizer,
    B: TreeBuilder,
{
    /// Creates a new reader over `tokenizer`, building trees with
    /// `tree_builder` and no normalization.
    ///
    /// Skips a legacy corpus header at the start of the stream, if present.
    pub fn new(mut tokenizer: T, tree_builder: B) -> Self {
        skip_legacy_header(&mut tokenizer);
        Self {
            tokenizer,
            tree_builder,
            normalizer: IdentityNormalizer,
            current_tree: None,
            stack: Vec::new(),
        }
    }
}

impl<T, B, N> PennTreeReader<T, B, N>
where
    T: Tokenizer,
    B: TreeBuilder,
    N: TreeNormalizer<B::Label>,
{
    /// Replaces the normalizer.
    pub fn with_normalizer<M: TreeNormalizer<B::Label>>(self, normalizer: M) -> PennTreeReader<T, B, M> {
        PennTreeReader {
            tokenizer: self.tokenizer,
            tree_builder: self.tree_builder,
            normalizer,
            current_tree: None,
            stack: Vec::new(),
        }
    }

    /// Consumes the reader and returns tokenizer, tree builder and normalizer.
    pub fn into_parts(self) -> (T, B, N) {
        (self.tokenizer, self.tree_builder, self.normalizer)
    }

    /// Get ref to the underlying [TreeBuilder]
    pub fn tree_builder(&self) -> &B {
        &self.tree_builder
    }

    /// Closes the reader, releasing the tokenizer and its source
    /// (e.g. closing the file).
    ///
    /// Consuming the reader guarantees the release happens exactly once.
    /// Dropping the reader releases the same resources.
    pub fn close(self) {
        debug!("Closing reader after {} tokens", self.tokenizer.position());
    }
}

// Convenience Default 1
impl PennTreeReader<PennTokenizer<InMemoryByteSource>, SimpleTreeBuilder> {
    /// Creates a reader over a copy of the given string with default
    /// settings: [SimpleTreeBuilder], no normalization.
    pub fn for_str(input: &str) -> Self {
        Self::new(PennTokenizer::for_str(input), SimpleTreeBuilder::new())
    }
}

// Convenience Default 2
impl PennTreeReader<PennTokenizer<BufferedByteSource>, SimpleTreeBuilder> {
    /// Creates a reader streaming the given file with default settings:
    /// [SimpleTreeBuilder], no normalization.
    ///
    /// # Errors
    /// Returns an [IoError](crate::parser::ParsingErrorType::IoError) if
    /// the file cannot be opened.
    pub fn for_file<P: AsRef<Path>>(path: P) -> Result<Self, ParsingError> {
        let tokenizer = PennTokenizer::from_file_buffered(path)?;
        Ok(Self::new(tokenizer, SimpleTreeBuilder::new()))
    }
}

// ============================================================================
// API Reading (pub)
// ============================================================================
impl<T, B, N> PennTreeReader<T, B, N>
where
    T: Tokenizer,
    B: TreeBuilder,
    N: TreeNormalizer<B::Label>,
{
    /// Reads the next tree.
    ///
    /// Malformed regions are skipped silently (see [PennTreeReader]).
    /// Once the stream is exhausted, every further call returns `Ok(None)`.
    ///
    /// # Returns
    /// * `Ok(Some(tree))` - The next normalized tree with indexed leaves
    /// * `Ok(None)` - No more trees
    /// * `Err(ParsingError)` - If the stream ended inside a tree, or its
    ///   source failed
    pub fn read_tree(&mut self) -> Result<Option<Tree<B::Label>>, ParsingError> {
        while self.tokenizer.has_next() {
            match self.read_attempt() {
                Attempt::Completed(root) => {
                    if let Some(tree) = self.tree_builder.finish_tree(root) {
                        return Ok(Some(self.finalize(tree)));
                    }
                    debug!("Tree builder returned no tree at token {}", self.tokenizer.position());
                }
                Attempt::Malformed(reason) => {
                    debug!("Skipping malformed input at token {}: {reason}", self.tokenizer.position());
                }
                Attempt::ExhaustedMidTree => {
                    self.check_source()?;
                    let open_chain = self.render_open_chain();
                    return Err(ParsingError::unexpected_end_of_input(&self.tokenizer, open_chain));
                }
                Attempt::EndOfStream => break,
            }
        }

        self.check_source()?;
        Ok(None)
    }

    /// Reads all remaining trees.
    ///
    /// # Returns
    /// * `Ok(Vec<Tree>)` - All trees until end of stream
    /// * `Err(ParsingError)` - If the stream ended inside a tree
    pub fn read_all(&mut self) -> Result<Vec<Tree<B::Label>>, ParsingError> {
        let mut trees = Vec::new();
        while let Some(tree) = self.read_tree()? {
            trees.push(tree);
        }
        Ok(trees)
    }
}

// ============================================================================
// Reading (private)
// ============================================================================
impl<T, B, N> PennTreeReader<T, B, N>
where
    T: Tokenizer,
    B: TreeBuilder,
    N: TreeNormalizer<B::Label>,
{
    /// Runs the automaton until one tree is closed or the attempt fails.
    fn read_attempt(&mut self) -> Attempt {
        // Set up PDA
        self.current_tree = None;
        self.stack.clear();
        self.tree_builder.init_next();
        let mut word_index = 1;

        while let Some(token) = self.tokenizer.next_token() {
            match token.as_str() {
                LEFT_PAREN => {
                    let next_is_open = match self.tokenizer.peek() {
                        Some(next) => next == LEFT_PAREN,
                        None => return Attempt::ExhaustedMidTree,
                    };
                    // No label if directly followed by a bracket, as for an outer ROOT
                    let label = if next_is_open { None } else { self.tokenizer.next_token() };
                    if label.as_deref() == Some(RIGHT_PAREN) {
                        // Skip past empty trees
                        continue;
                    }
                    self.open_node(label);
                }
                RIGHT_PAREN => {
                    let Some(node) = self.stack.pop() else {
                        return Attempt::Malformed(MalformedInput::UnmatchedCloseBracket);
                    };
                    self.current_tree = Some(node);
                    if self.stack.is_empty() {
                        return Attempt::Completed(node);
                    }
                }
                _ => {
                    let Some(parent) = self.current_tree else {
                        return Attempt::Malformed(MalformedInput::TokenOutsideTree(token));
                    };
                    self.add_terminal(parent, &token, word_index);
                    word_index += 1;
                }
            }
        }

        if self.current_tree.is_some() || !self.stack.is_empty() {
            Attempt::ExhaustedMidTree
        } else {
            Attempt::EndOfStream
        }
    }

    /// Creates a node for `label` and makes it the innermost open node.
    fn open_node(&mut self, label: Option<String>) {
        let label = self
            .normalizer
            .normalize_nonterminal(label.as_deref())
            .map(|label| unescape_token(&label));

        let node = self.tree_builder.add_internal(label);
        match self.current_tree {
            None => self.stack.push(node),
            Some(parent) => {
                self.tree_builder.add_child(parent, node);
                self.stack.push(parent);
            }
        }
        self.current_tree = Some(node);
    }

    /// Creates a leaf for `token` and appends it to `parent`.
    fn add_terminal(&mut self, parent: NodeIndex, token: &str, word_index: usize) {
        let terminal = unescape_token(&self.normalizer.normalize_terminal(token));
        let leaf = self.tree_builder.add_leaf(terminal);

        if let Some(label) = self.tree_builder.label_mut(leaf) {
            if let Some(has_index) = label.as_has_index_mut() {
                has_index.set_index(word_index);
            }
            let word = label.value().to_string();
            if let Some(has_word) = label.as_has_word_mut() {
                has_word.set_word(word);
            }
        }

        self.tree_builder.add_child(parent, leaf);
    }

    /// Fails if the token stream ended because its source failed.
    fn check_source(&mut self) -> Result<(), ParsingError> {
        match self.tokenizer.take_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Normalizes a finished tree and numbers its leaves.
    fn finalize(&mut self, tree: Tree<B::Label>) -> Tree<B::Label> {
        let mut tree = self.normalizer.normalize_whole_tree(tree);
        tree.index_leaves();
        trace!("Read tree with {} nodes up to token {}", tree.num_nodes(), self.tokenizer.position());
        tree
    }

    /// Renders the open nodes of the current attempt, outermost first, e.g. `(S (NP`.
    fn render_open_chain(&self) -> String {
        // The first stack entry repeats the root, which is on the stack
        // once more as soon as it has an open child
        self.stack
            .iter()
            .skip(1)
            .copied()
            .chain(self.current_tree)
            .map(|index| match self.tree_builder.label(index) {
                Some(label) => format!("({}", label.value()),
                None => "(".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Skips a legacy corpus header: if the first token starts with the header
/// prefix, tokens are consumed until four prefixed tokens were seen.
fn skip_legacy_header<T: Tokenizer>(tokenizer: &mut T) {
    if !starts_with(tokenizer.peek(), LEGACY_HEADER_PREFIX) {
        return;
    }

    let mut found_count = 0;
    while found_count < LEGACY_HEADER_TOKEN_COUNT {
        let Some(token) = tokenizer.next_token() else {
            break;
        };
        if token.starts_with(LEGACY_HEADER_PREFIX) {
            found_count += 1;
        }
    }
    debug!("Skipped legacy header of {} tokens", tokenizer.position());
}

// =#========================================================================#=
// PENN TREE ITERATOR (lazy reader)
// =#========================================================================$=
/// Iterator to read Penn Treebank trees.
///
/// Created by [PennTreeReader::into_iter()].
/// Yields `Result<Tree, ParsingError>` for each tree and stops after the
/// end of the stream or the first error.
///
/// After iteration, the underlying [PennTreeReader] can be retrieved
/// via [into_reader()](Self::into_reader).
pub struct PennTreeIterator<T, B, N>
where
    T: Tokenizer,
    B: TreeBuilder,
    N: TreeNormalizer<B::Label>,
{
    reader: PennTreeReader<T, B, N>,
    done: bool,
}

impl<T, B, N> PennTreeIterator<T, B, N>
where
    T: Tokenizer,
    B: TreeBuilder,
    N: TreeNormalizer<B::Label>,
{
    /// Consumes the iterator and returns the underlying [PennTreeReader].
    pub fn into_reader(self) -> PennTreeReader<T, B, N> {
        self.reader
    }
}

impl<T, B, N> Iterator for PennTreeIterator<T, B, N>
where
    T: Tokenizer,
    B: TreeBuilder,
    N: TreeNormalizer<B::Label>,
{
    type Item = Result<Tree<B::Label>, ParsingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.reader.read_tree() {
            Ok(Some(tree)) => Some(Ok(tree)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<T, B, N> IntoIterator for PennTreeReader<T, B, N>
where
    T: Tokenizer,
    B: TreeBuilder,
    N: TreeNormalizer<B::Label>,
{
    type Item = Result<Tree<B::Label>, ParsingError>;
    type IntoIter = PennTreeIterator<T, B, N>;

    fn into_iter(self) -> Self::IntoIter {
        PennTreeIterator {
            reader: self,
            done: false,
        }
    }
}

// =#========================================================================#=
// TESTS
// =#========================================================================$=
#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::IterTokenizer;

    fn reader_over(tokens: &[&str]) -> PennTreeReader<IterTokenizer<std::vec::IntoIter<String>>, SimpleTreeBuilder> {
        let tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        PennTreeReader::new(IterTokenizer::new(tokens), SimpleTreeBuilder::new())
    }

    #[test]
    fn test_attempt_outcomes() {
        let mut reader = reader_over(&[")", "stray", "(", "A", ")"]);
        assert_eq!(
            reader.read_attempt(),
            Attempt::Malformed(MalformedInput::UnmatchedCloseBracket)
        );
        assert_eq!(
            reader.read_attempt(),
            Attempt::Malformed(MalformedInput::TokenOutsideTree("stray".to_string()))
        );
        assert!(matches!(reader.read_attempt(), Attempt::Completed(_)));
        assert_eq!(reader.read_attempt(), Attempt::EndOfStream);
    }

    #[test]
    fn test_open_bracket_as_last_token_is_exhaustion() {
        let mut reader = reader_over(&["("]);
        assert_eq!(reader.read_attempt(), Attempt::ExhaustedMidTree);
    }

    #[test]
    fn test_open_chain_rendering() {
        let mut reader = reader_over(&["(", "(", "S", "(", "NP", "dog"]);
        let err = reader.read_tree().unwrap_err();
        assert_eq!(err.context(), "( (S (NP");
        assert_eq!(err.position(), 6);
    }

    #[test]
    fn test_header_counting_includes_first_token() {
        let mut reader = reader_over(&["*x*x*x", "junk", "*x*x*x-2", "*x*x*x", "more", "*x*x*x", "(", "A", ")"]);
        let tree = reader.read_tree().unwrap().unwrap();
        assert_eq!(tree.root().value(), Some("A"));
    }
}
