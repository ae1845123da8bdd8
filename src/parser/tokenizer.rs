//! Token sources for the tree reader.
//!
//! The reader consumes tokens through the [Tokenizer] trait: a lazy, finite,
//! non-restartable sequence of string tokens with one token of lookahead.
//!
//! Implementations:
//! * [PennTokenizer] - splits bracketed text from any [ByteSource]
//! * [IterTokenizer] - wraps an iterator of already split tokens

use crate::parser::buffered_byte_source::BufferedByteSource;
use crate::parser::byte_source::ByteSource;
use crate::parser::in_memory_byte_source::InMemoryByteSource;
use crate::parser::parsing_error::ParsingError;
use std::fs::File;
use std::iter::Peekable;
use std::path::Path;

/// Token opening a bracketed subexpression.
pub const LEFT_PAREN: &str = "(";
/// Token closing a bracketed subexpression.
pub const RIGHT_PAREN: &str = ")";

// =#========================================================================#=
// TOKENIZER (trait)
// =#========================================================================T=
/// A stateful source of string tokens with one token of lookahead.
///
/// Implementations must yield `(` and `)` as standalone tokens, distinct
/// from word tokens.
pub trait Tokenizer {
    /// Returns the next token without consuming it, `None` at end of stream.
    fn peek(&mut self) -> Option<&str>;

    /// Consumes and returns the next token, `None` at end of stream.
    fn next_token(&mut self) -> Option<String>;

    /// Returns whether another token is available.
    fn has_next(&mut self) -> bool {
        self.peek().is_some()
    }

    /// Returns the number of tokens consumed so far.
    fn position(&self) -> usize;

    /// Takes the error that ended the stream early, if any.
    ///
    /// The stream ending is indistinguishable from a failure until this is
    /// asked; an error is handed out once.
    fn take_error(&mut self) -> Option<ParsingError> {
        None
    }
}

// =#========================================================================#=
// PENN TOKENIZER
// =#========================================================================$=
/// Splits Penn Treebank bracketed text into tokens.
///
/// Tokens are maximal runs of non-whitespace bytes, except that `(` and
/// `)` always form tokens of their own, e.g. `(NN dog))` yields
/// `(`, `NN`, `dog`, `)`, `)`. Word bytes are decoded as UTF-8; invalid
/// sequences are replaced with the Unicode replacement character.
///
/// # Example
/// ```
/// use penntree::parser::{PennTokenizer, Tokenizer};
///
/// let mut tokenizer = PennTokenizer::for_str("(NP (DT the)(NN cat))");
/// assert_eq!(tokenizer.peek(), Some("("));
/// let tokens: Vec<String> = std::iter::from_fn(|| tokenizer.next_token()).collect();
/// assert_eq!(tokens, ["(", "NP", "(", "DT", "the", ")", "(", "NN", "cat", ")", ")"]);
/// ```
#[derive(Debug)]
pub struct PennTokenizer<B: ByteSource> {
    source: B,
    /// Token read ahead by `peek`, not yet consumed
    lookahead: Option<String>,
    /// Number of tokens consumed
    position: usize,
}

impl PennTokenizer<InMemoryByteSource> {
    /// Creates a tokenizer over a copy of the given string.
    pub fn for_str(input: &str) -> Self {
        Self::new(InMemoryByteSource::from_vec(input.as_bytes().to_vec()))
    }

    /// Creates a tokenizer over a file read entirely into memory.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Ok(Self::new(InMemoryByteSource::from_file(path)?))
    }
}

impl PennTokenizer<BufferedByteSource<File>> {
    /// Creates a tokenizer streaming the given file through a buffer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn from_file_buffered<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Ok(Self::new(BufferedByteSource::from_file(path)?))
    }
}

impl<B: ByteSource> PennTokenizer<B> {
    /// Creates a new tokenizer reading from `source`.
    pub fn new(source: B) -> Self {
        Self {
            source,
            lookahead: None,
            position: 0,
        }
    }

    /// Consumes the tokenizer and returns the underlying source.
    pub fn into_source(self) -> B {
        self.source
    }

    /// Reads the next token from the source, skipping leading whitespace.
    fn read_token(&mut self) -> Option<String> {
        while self.source.peek()?.is_ascii_whitespace() {
            self.source.next_byte();
        }

        match self.source.next_byte()? {
            b'(' => Some(LEFT_PAREN.to_string()),
            b')' => Some(RIGHT_PAREN.to_string()),
            first => {
                let mut bytes = vec![first];
                while let Some(b) = self.source.peek() {
                    if b.is_ascii_whitespace() || b == b'(' || b == b')' {
                        break;
                    }
                    bytes.push(b);
                    self.source.next_byte();
                }
                Some(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }
}

impl<B: ByteSource> Tokenizer for PennTokenizer<B> {
    fn peek(&mut self) -> Option<&str> {
        if self.lookahead.is_none() {
            self.lookahead = self.read_token();
        }
        self.lookahead.as_deref()
    }

    fn next_token(&mut self) -> Option<String> {
        let token = match self.lookahead.take() {
            Some(token) => Some(token),
            None => self.read_token(),
        }?;
        self.position += 1;
        Some(token)
    }

    fn position(&self) -> usize {
        self.position
    }

    fn take_error(&mut self) -> Option<ParsingError> {
        let err = self.source.take_error()?;
        Some(ParsingError::read_failure(&*self, err, self.source.position()))
    }
}

// =#========================================================================#=
// ITER TOKENIZER
// =#========================================================================$=
/// Tokenizer over an iterator of already split tokens.
///
/// Useful when tokens come from elsewhere, e.g. a custom lexer. Tokens are
/// passed through verbatim, so brackets must already be separate tokens.
///
/// # Example
/// ```
/// use penntree::parser::{IterTokenizer, Tokenizer};
///
/// let mut tokenizer = IterTokenizer::new(["(", "X", "y", ")"].map(String::from));
/// assert_eq!(tokenizer.next_token().as_deref(), Some("("));
/// assert_eq!(tokenizer.peek(), Some("X"));
/// assert_eq!(tokenizer.position(), 1);
/// ```
#[derive(Debug)]
pub struct IterTokenizer<I: Iterator<Item = String>> {
    tokens: Peekable<I>,
    position: usize,
}

impl<I: Iterator<Item = String>> IterTokenizer<I> {
    /// Creates a tokenizer yielding the given tokens in order.
    pub fn new<T: IntoIterator<IntoIter = I>>(tokens: T) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
            position: 0,
        }
    }
}

impl<I: Iterator<Item = String>> Tokenizer for IterTokenizer<I> {
    fn peek(&mut self) -> Option<&str> {
        self.tokens.peek().map(String::as_str)
    }

    fn next_token(&mut self) -> Option<String> {
        let token = self.tokens.next()?;
        self.position += 1;
        Some(token)
    }

    fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tokens<T: Tokenizer>(tokenizer: &mut T) -> Vec<String> {
        std::iter::from_fn(|| tokenizer.next_token()).collect()
    }

    #[test]
    fn test_brackets_split_from_words() {
        let mut tokenizer = PennTokenizer::for_str("((S(NP-SBJ dog)))");
        assert_eq!(
            all_tokens(&mut tokenizer),
            vec!["(", "(", "S", "(", "NP-SBJ", "dog", ")", ")", ")"]
        );
        assert_eq!(tokenizer.position(), 9);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut tokenizer = PennTokenizer::for_str("  \n\t word  ");
        assert_eq!(tokenizer.peek(), Some("word"));
        assert_eq!(tokenizer.peek(), Some("word"));
        assert_eq!(tokenizer.position(), 0);
        assert_eq!(tokenizer.next_token().as_deref(), Some("word"));
        assert!(!tokenizer.has_next());
        assert_eq!(tokenizer.next_token(), None);
        assert_eq!(tokenizer.position(), 1);
    }

    #[test]
    fn test_utf8_words() {
        let mut tokenizer = PennTokenizer::for_str("(NN café)");
        assert_eq!(all_tokens(&mut tokenizer), vec!["(", "NN", "café", ")"]);
    }

    #[test]
    fn test_escapes_are_kept_verbatim() {
        let mut tokenizer = PennTokenizer::for_str(r"(-NONE- \*T\*-1)");
        assert_eq!(all_tokens(&mut tokenizer), vec!["(", "-NONE-", r"\*T\*-1", ")"]);
    }

    #[test]
    fn test_empty_input() {
        let mut tokenizer = PennTokenizer::for_str(" \n ");
        assert!(!tokenizer.has_next());
        assert_eq!(tokenizer.peek(), None);
    }
}
