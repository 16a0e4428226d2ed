//! linecut: select byte ranges or delimited fields from lines of text.
//!
//! A reduced reimplementation of the Unix `cut` utility. A position list
//! such as `1-2,4,7-9` is parsed into a normalized interval set, which a
//! byte- or field-oriented selector then applies to every input line.
//!
//! # Example
//!
//! ```rust
//! use linecut::{FieldSelector, LineProcessor};
//!
//! let selector = FieldSelector::new("1,3", ":", false).unwrap();
//! let out = selector.process_line(b"a:b:c").unwrap();
//! assert_eq!(out, b"a:c");
//! ```

pub mod interval;
pub mod lines;
pub mod selector;

// Re-export commonly used types
pub use interval::{Interval, IntervalSet, SpecError, POSITION_MAX};
pub use lines::{CutError, LineReader};
pub use selector::{ByteSelector, FieldSelector, LineProcessor};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::interval::{Interval, IntervalSet, SpecError, POSITION_MAX};
    pub use crate::lines::{CutError, LineReader};
    pub use crate::selector::{
        process_file, process_lines, ByteSelector, FieldSelector, LineProcessor,
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_basic_workflow() {
        use crate::lines::LineReader;
        use crate::selector::{process_lines, ByteSelector};

        let selector = ByteSelector::new("1-3", false).unwrap();
        let reader = LineReader::new(&b"hello\nworld\n"[..]);
        let mut output = Vec::new();

        process_lines(&selector, reader, &mut output).unwrap();

        assert_eq!(output, b"hel\nwor\n");
    }

    #[test]
    fn test_field_workflow() {
        use crate::lines::LineReader;
        use crate::selector::{process_lines, FieldSelector};

        let selector = FieldSelector::new("2", "\t", true).unwrap();
        let reader = LineReader::new(&b"a\tb\tc\n"[..]);
        let mut output = Vec::new();

        process_lines(&selector, reader, &mut output).unwrap();

        assert_eq!(output, b"a\tc\n");
    }
}
