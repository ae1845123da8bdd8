//! Buffered reader implementation of byte source for tokenizing.
//!
//! This module provides [BufferedByteSource], which wraps a reader in a
//! [BufReader] for efficient streaming I/O. Use this for large treebank
//! files where loading everything into memory would be impractical.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::parser::byte_source::ByteSource;

// =#========================================================================#=
// BUFFERED BYTE SOURCE
// =#========================================================================$=
/// A buffered byte source for streaming large inputs.
///
/// A read error ends the data; the error is kept and handed out once by
/// [take_error](ByteSource::take_error).
#[derive(Debug)]
pub struct BufferedByteSource<R: Read = File> {
    /// Underlying reader, handles getting chunks from the input
    reader: BufReader<R>,

    /// Current absolute position in the stream
    pos: usize,

    /// Read error not yet taken
    error: Option<io::Error>,

    /// Whether reading failed; no further reads are attempted
    failed: bool,
}

impl BufferedByteSource<File> {
    /// Creates a new buffered byte source from a file path.
    ///
    /// # Arguments
    /// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> BufferedByteSource<R> {
    /// Creates a new buffered byte source reading from `reader`.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            pos: 0,
            error: None,
            failed: false,
        }
    }
}

impl<R: Read> ByteSource for BufferedByteSource<R> {
    fn peek(&mut self) -> Option<u8> {
        if self.failed {
            return None;
        }

        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return buf.first().copied(),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    self.error = Some(err);
                    self.failed = true;
                    return None;
                }
            }
        }
    }

    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.reader.consume(1);
        self.pos += 1;
        Some(byte)
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}
