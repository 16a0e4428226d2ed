//! Byte-oriented selection.

use crate::interval::{IntervalSet, Result};
use crate::selector::LineProcessor;

/// Selects byte ranges from each line.
///
/// The selected ranges are concatenated with no separator. Positions are raw
/// storage units; multi-byte characters may be split.
#[derive(Debug, Clone)]
pub struct ByteSelector {
    intervals: IntervalSet,
}

impl ByteSelector {
    /// Build a selector from a position list, optionally inverted.
    ///
    /// Parsing and complementing happen once, here; a construction error
    /// means no line is ever processed.
    pub fn new(spec: &str, complement: bool) -> Result<Self> {
        let intervals = IntervalSet::parse(spec)?;
        let intervals = if complement {
            intervals.complement()
        } else {
            intervals
        };
        Ok(Self { intervals })
    }

    /// The normalized interval set this selector applies.
    pub fn intervals(&self) -> &IntervalSet {
        &self.intervals
    }
}

impl LineProcessor for ByteSelector {
    fn process_line(&self, line: &[u8]) -> Option<Vec<u8>> {
        if line.is_empty() {
            return None;
        }

        let len = line.len() as u64;
        let mut out = Vec::with_capacity(line.len());

        for iv in self.intervals.iter() {
            // Intervals are sorted ascending, so the first one past the end
            // of the line ends the walk.
            if iv.start > len {
                break;
            }
            let start = (iv.start - 1) as usize;
            let end = iv.end.min(len) as usize;
            out.extend_from_slice(&line[start..end]);
        }

        Some(out)
    }
}
