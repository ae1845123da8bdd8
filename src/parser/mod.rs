//! Low-level token sources and error handling.
//!
//! This module provides the [Tokenizer] trait consumed by the tree reader,
//! the default [PennTokenizer] over in-memory or buffered byte sources,
//! token unescaping helpers, and [ParsingError].

pub(crate) mod buffered_byte_source;
pub mod byte_source;
pub(crate) mod in_memory_byte_source;
pub mod parsing_error;
pub mod tokenizer;
pub mod utils;

pub use buffered_byte_source::BufferedByteSource;
pub use byte_source::ByteSource;
pub use in_memory_byte_source::InMemoryByteSource;
pub use parsing_error::{ParsingError, ParsingErrorType};
pub use tokenizer::{IterTokenizer, PennTokenizer, Tokenizer};
