//! Line selectors.
//!
//! A selector is built once per invocation from a position list (and, for
//! field mode, a delimiter), then applied to every input line. Both variants
//! implement [`LineProcessor`], and the generic loop in [`process_lines`]
//! drives any of them over a [`LineReader`].

pub mod byte;
pub mod field;

pub use byte::ByteSelector;
pub use field::FieldSelector;

use std::io::{Read, Write};
use std::path::Path;

use crate::lines::{CutError, LineReader};

/// Turns one input line into at most one output line.
pub trait LineProcessor {
    /// Process a single line (without its terminator).
    ///
    /// `Some(bytes)` is emitted followed by a newline; `None` suppresses the
    /// output line entirely.
    fn process_line(&self, line: &[u8]) -> Option<Vec<u8>>;
}

/// Run a processor over every line of a reader.
///
/// Lines are handled strictly in input order, one at a time.
pub fn process_lines<P, R, W>(
    processor: &P,
    reader: LineReader<R>,
    output: &mut W,
) -> Result<(), CutError>
where
    P: LineProcessor + ?Sized,
    R: Read,
    W: Write,
{
    for line in reader.lines() {
        let line = line?;
        if let Some(out) = processor.process_line(&line) {
            output.write_all(&out).map_err(CutError::Io)?;
            output.write_all(b"\n").map_err(CutError::Io)?;
        }
    }
    Ok(())
}

/// Run a processor over a file.
pub fn process_file<P, I, W>(processor: &P, input: I, output: &mut W) -> Result<(), CutError>
where
    P: LineProcessor + ?Sized,
    I: AsRef<Path>,
    W: Write,
{
    let reader = LineReader::from_path(input)?;
    process_lines(processor, reader, output)
}
