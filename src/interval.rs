//! Position list parsing and normalized interval sets.
//!
//! A position list such as `1-2,4,7-9` selects 1-based positions in a line
//! (bytes or fields). Parsing produces an [`IntervalSet`]: sorted, merged,
//! non-overlapping, with touching ranges coalesced.

use std::fmt;
use thiserror::Error;

/// Upper bound of the position domain, used when complementing a set.
pub const POSITION_MAX: u64 = u64::MAX;

/// Errors raised while parsing a position list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("invalid position list: '{0}'")]
    Malformed(String),

    #[error("decreasing range: {start}-{end}")]
    Reversed { start: u64, end: u64 },
}

pub type Result<T> = std::result::Result<T, SpecError>;

/// An inclusive range of 1-based positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: u64,
    pub end: u64,
}

impl Interval {
    #[inline]
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A normalized list of intervals: sorted ascending by start, pairwise
/// non-overlapping, and with no two ranges touching (`end + 1 == start`).
///
/// Built once when a selector is constructed and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// Parse a position list.
    ///
    /// Grammar: `digits ("-" digits)? ("," digits ("-" digits)?)*`.
    /// Positions are 1-based; whitespace is not permitted. Returns the merged
    /// normalized set.
    pub fn parse(spec: &str) -> Result<Self> {
        if spec.is_empty() {
            return Err(SpecError::Malformed(spec.to_string()));
        }

        let mut intervals = Vec::new();
        for item in spec.split(',') {
            let (start, end) = match item.split_once('-') {
                Some((lo, hi)) => (parse_position(lo, spec)?, parse_position(hi, spec)?),
                None => {
                    let pos = parse_position(item, spec)?;
                    (pos, pos)
                }
            };

            if start > end {
                return Err(SpecError::Reversed { start, end });
            }

            intervals.push(Interval::new(start, end));
        }

        Ok(Self::merge(intervals))
    }

    /// Merge intervals into a normalized set.
    ///
    /// Sorts by start, then a single left-to-right sweep: ranges that overlap
    /// or touch (`top.end + 1 == next.start`) extend the current top, fully
    /// contained ranges are dropped.
    pub fn merge(mut intervals: Vec<Interval>) -> Self {
        intervals.sort_unstable_by_key(|iv| iv.start);

        let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
        for iv in intervals {
            match merged.last_mut() {
                Some(top) if iv.start <= top.end.saturating_add(1) => {
                    if iv.end > top.end {
                        top.end = iv.end;
                    }
                }
                _ => merged.push(iv),
            }
        }

        Self { intervals: merged }
    }

    /// The gaps between and around this set over the domain `[1, POSITION_MAX]`.
    ///
    /// The empty set complements to itself.
    pub fn complement(&self) -> Self {
        let (first, last) = match (self.intervals.first(), self.intervals.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Self::default(),
        };

        let mut gaps = Vec::with_capacity(self.intervals.len() + 1);

        if first.start > 1 {
            gaps.push(Interval::new(1, first.start - 1));
        }

        // Normalization guarantees next.start >= prev.end + 2, so every gap
        // here is non-empty.
        for pair in self.intervals.windows(2) {
            gaps.push(Interval::new(pair[0].end + 1, pair[1].start - 1));
        }

        if last.end < POSITION_MAX {
            gaps.push(Interval::new(last.end + 1, POSITION_MAX));
        }

        Self { intervals: gaps }
    }

    #[inline]
    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, iv) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", iv)?;
        }
        Ok(())
    }
}

/// Parse one position: non-empty, ASCII digits only, fits in u64, >= 1.
fn parse_position(s: &str, spec: &str) -> Result<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SpecError::Malformed(spec.to_string()));
    }

    let pos: u64 = s
        .parse()
        .map_err(|_| SpecError::Malformed(spec.to_string()))?;

    // Positions are 1-based; 0 never addresses anything.
    if pos == 0 {
        return Err(SpecError::Malformed(spec.to_string()));
    }

    Ok(pos)
}
