//! Streaming line reader for input files.
//!
//! Lines are raw byte strings. Positions in a line are opaque storage units;
//! no character decoding happens anywhere in the pipeline, so non-UTF-8
//! input passes through untouched.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

use crate::interval::SpecError;

/// Errors that can occur while running a selector over input.
#[derive(Error, Debug)]
pub enum CutError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Spec(#[from] SpecError),
}

pub type Result<T> = std::result::Result<T, CutError>;

/// A streaming reader that yields one line at a time.
///
/// Line terminators (`\n` or `\r\n`) are stripped; the final line is yielded
/// even when it lacks a terminator. Only the current line is held in memory.
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    buffer: Vec<u8>,
}

impl LineReader<File> {
    /// Open a file from a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> LineReader<R> {
    /// Create a line reader from any readable source.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            buffer: Vec::with_capacity(1024),
        }
    }

    /// Create a line reader with custom buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            buffer: Vec::with_capacity(1024),
        }
    }

    /// Read the next line, without its terminator.
    pub fn read_line(&mut self) -> Result<Option<Vec<u8>>> {
        self.buffer.clear();
        let bytes_read = self.reader.read_until(b'\n', &mut self.buffer)?;
        if bytes_read == 0 {
            return Ok(None);
        }

        let mut line = self.buffer.as_slice();
        if let Some(stripped) = line.strip_suffix(b"\n") {
            line = stripped;
        }
        if let Some(stripped) = line.strip_suffix(b"\r") {
            line = stripped;
        }

        Ok(Some(line.to_vec()))
    }

    /// Get an iterator over all lines.
    pub fn lines(self) -> LineIter<R> {
        LineIter { reader: self }
    }
}

/// Iterator over lines of a [`LineReader`].
pub struct LineIter<R: Read> {
    reader: LineReader<R>,
}

impl<R: Read> Iterator for LineIter<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
