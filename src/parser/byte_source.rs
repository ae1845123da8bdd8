//! Byte source abstractions for tokenizing.
//!
//! This module provides the [ByteSource] trait; implementations live in
//! [InMemoryByteSource](crate::parser::InMemoryByteSource) and
//! [BufferedByteSource](crate::parser::BufferedByteSource).

// =#========================================================================#=
// BYTE SOURCE (Trait)
// =#========================================================================T=
/// Trait defining the interface for different byte sources used by
/// [PennTokenizer](crate::parser::PennTokenizer).
///
/// This trait abstracts over different ways of accessing byte data:
/// - In-memory byte vectors
/// - Buffered reading from files or any other [Read](std::io::Read)er
///
/// By using this trait, the same tokenizer logic can work with both small
/// files loaded entirely into memory and large treebanks streamed from disk.
pub trait ByteSource {
    /// Peek at the current byte without consuming it.
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    fn peek(&mut self) -> Option<u8>;

    /// Get the current byte and advance the position (consume it).
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    fn next_byte(&mut self) -> Option<u8>;

    /// Returns the current position in the byte stream.
    fn position(&self) -> usize;

    /// Takes the read error that ended the data early, if any.
    ///
    /// Sources that cannot fail after construction keep the default.
    fn take_error(&mut self) -> Option<std::io::Error> {
        None
    }
}
