//! Field-oriented selection.

use memchr::memmem;

use crate::interval::{IntervalSet, Result};
use crate::selector::LineProcessor;

/// Selects delimiter-separated fields from each line.
///
/// A line that does not contain the delimiter at all is passed through
/// verbatim. The delimiter must be non-empty; the CLI enforces this before
/// construction.
#[derive(Debug, Clone)]
pub struct FieldSelector {
    intervals: IntervalSet,
    delimiter: Vec<u8>,
}

impl FieldSelector {
    /// Build a selector from a position list and a delimiter, optionally
    /// inverted.
    ///
    /// Parsing and complementing happen once, here; a construction error
    /// means no line is ever processed.
    pub fn new(spec: &str, delimiter: &str, complement: bool) -> Result<Self> {
        let intervals = IntervalSet::parse(spec)?;
        let intervals = if complement {
            intervals.complement()
        } else {
            intervals
        };
        Ok(Self {
            intervals,
            delimiter: delimiter.as_bytes().to_vec(),
        })
    }

    /// The normalized interval set this selector applies.
    pub fn intervals(&self) -> &IntervalSet {
        &self.intervals
    }

    /// Split a line on every occurrence of the delimiter.
    fn split<'a>(&self, line: &'a [u8]) -> Vec<&'a [u8]> {
        let mut fields = Vec::new();
        let mut start = 0;
        for pos in memmem::find_iter(line, &self.delimiter) {
            fields.push(&line[start..pos]);
            start = pos + self.delimiter.len();
        }
        fields.push(&line[start..]);
        fields
    }
}

impl LineProcessor for FieldSelector {
    fn process_line(&self, line: &[u8]) -> Option<Vec<u8>> {
        if line.is_empty() {
            return None;
        }

        if memmem::find(line, &self.delimiter).is_none() {
            return Some(line.to_vec());
        }

        let fields = self.split(line);
        let count = fields.len() as u64;
        let mut out = Vec::with_capacity(line.len());

        for (idx, iv) in self.intervals.iter().enumerate() {
            // Same short-circuit as byte mode: intervals are sorted, so the
            // first start past the field count ends the walk.
            if iv.start > count {
                break;
            }

            // The joining delimiter is keyed off position in the interval
            // list, not off whether a previous interval emitted anything.
            // With the short-circuit above the two readings coincide.
            if idx > 0 {
                out.extend_from_slice(&self.delimiter);
            }

            let start = (iv.start - 1) as usize;
            let end = iv.end.min(count) as usize;
            for (i, field) in fields[start..end].iter().enumerate() {
                if i > 0 {
                    out.extend_from_slice(&self.delimiter);
                }
                out.extend_from_slice(field);
            }
        }

        Some(out)
    }
}
