//! Error types for reading Penn Treebank trees.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for
//! representing and reporting errors that surface to the caller.
//! Malformed brackets (an unmatched `)` or a token outside any tree) are
//! not errors: the reader skips them and continues.

use crate::parser::tokenizer::Tokenizer;
use thiserror::Error;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================€=
/// Error types that can occur while reading trees.
#[derive(Error, PartialEq, Debug, Clone)]
pub enum ParsingErrorType {
    /// Token stream ended while a tree was still open.
    #[error("End of token stream encountered before tree was complete")]
    UnexpectedEndOfInput,
    /// Operation not supported, e.g. building a label from an encoded string.
    #[error("Unsupported operation - {0}")]
    UnsupportedOperation(String),
    /// Underlying source could not be opened or read.
    #[error("IO error - {0}")]
    IoError(String),
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================$=
/// Parsing error with contextual information (token position and the
/// brackets still open when the error was detected).
#[derive(Error, Debug, Clone)]
#[error("{kind} at token {position}{}", render_context(.context))]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type and tokenizer state
    pub fn from_tokenizer<T: Tokenizer>(kind: ParsingErrorType, tokenizer: &T, context: String) -> Self {
        Self {
            kind,
            position: tokenizer.position(),
            context,
        }
    }

    /// Convenience constructor for UnexpectedEndOfInput
    ///
    /// # Arguments
    /// * `tokenizer` - The exhausted tokenizer
    /// * `open_chain` - Rendering of the still open brackets, e.g. `(S (NP`
    pub fn unexpected_end_of_input<T: Tokenizer>(tokenizer: &T, open_chain: String) -> Self {
        Self::from_tokenizer(ParsingErrorType::UnexpectedEndOfInput, tokenizer, open_chain)
    }

    /// Convenience constructor for an IoError while streaming tokens
    ///
    /// # Arguments
    /// * `tokenizer` - The tokenizer whose source failed
    /// * `err` - The read error
    /// * `byte_offset` - Number of bytes read before the failure
    pub fn read_failure<T: Tokenizer>(tokenizer: &T, err: std::io::Error, byte_offset: usize) -> Self {
        let kind = ParsingErrorType::IoError(format!("{err} (after byte {byte_offset})"));
        Self::from_tokenizer(kind, tokenizer, String::new())
    }

    /// Convenience constructor for UnsupportedOperation
    pub fn unsupported_operation(msg: String) -> Self {
        Self::without_context(ParsingErrorType::UnsupportedOperation(msg))
    }

    /// Create a ParsingError without tokenizer context
    pub fn without_context(kind: ParsingErrorType) -> Self {
        Self {
            kind,
            position: 0,
            context: String::new(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the number of tokens consumed when the error occurred
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the rendering of the brackets open when the error occurred
    pub fn context(&self) -> &str {
        &self.context
    }
}

/// Renders the optional context suffix of the error message.
fn render_context(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!("\n  Open brackets: {context}")
    }
}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        ParsingError::without_context(ParsingErrorType::IoError(err.to_string()))
    }
}
