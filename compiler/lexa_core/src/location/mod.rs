//! Line/column derivation for byte offsets.
//!
//! Locations are never tracked on the scanning hot path. They are derived
//! after the fact, either one at a time with
//! [`SourceLocation::from_offset`] (a single pass over the preceding text)
//! or in bulk through a [`LineIndex`], which pre-computes line starts for
//! O(log L) lookups.
//!
//! Lines end at `\n`. A `\r\n` pair is therefore one line break, and a
//! lone `\r` is an ordinary character. Columns count characters, not bytes.

use std::fmt;

use crate::Span;

/// Largest char boundary in `source` at or before `offset`.
fn floor_boundary(source: &str, offset: u32) -> usize {
    let mut offset = (offset as usize).min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Count characters in `text` as a 1-based column.
fn column_of(text: &str) -> u32 {
    u32::try_from(text.chars().count()).unwrap_or(u32::MAX - 1) + 1
}

/// 1-based line and column of a position in the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    /// Location of the first character of a source.
    pub const START: SourceLocation = SourceLocation { line: 1, column: 1 };

    /// Derive the location of `offset` by scanning the preceding text once.
    ///
    /// Offsets past the end clamp to the end of input; offsets inside a
    /// multi-byte character resolve to that character.
    pub fn from_offset(source: &str, offset: u32) -> Self {
        let prefix = &source[..floor_boundary(source, offset)];
        let (line, line_start) = prefix
            .bytes()
            .enumerate()
            .filter(|&(_, b)| b == b'\n')
            .fold((1u32, 0usize), |(line, _), (i, _)| {
                (line.saturating_add(1), i + 1)
            });
        SourceLocation {
            line,
            column: column_of(&prefix[line_start..]),
        }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Pre-computed line start table for repeated location lookups.
///
/// # Example
///
/// ```
/// use lexa_core::{LineIndex, SourceLocation};
///
/// let source = "line1\nline2\nline3";
/// let index = LineIndex::build(source);
///
/// assert_eq!(index.location(source, 0), SourceLocation { line: 1, column: 1 });
/// assert_eq!(index.location(source, 6), SourceLocation { line: 2, column: 1 });
/// assert_eq!(index.location(source, 14), SourceLocation { line: 3, column: 3 });
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineIndex {
    /// Byte offset of each line start. `line_starts[0] == 0`.
    line_starts: Vec<u32>,
}

impl LineIndex {
    /// Build the table with one pass over `source`.
    pub fn build(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        line_starts.extend(
            memchr::memchr_iter(b'\n', source.as_bytes())
                .map(|i| u32::try_from(i + 1).unwrap_or(u32::MAX)),
        );
        LineIndex { line_starts }
    }

    /// Number of lines (a trailing newline starts an empty last line).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// 1-based line containing `offset`.
    pub fn line_of(&self, offset: u32) -> u32 {
        let idx = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// Byte offset where 1-based `line` starts, if it exists.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        let idx = usize::try_from(line.checked_sub(1)?).ok()?;
        self.line_starts.get(idx).copied()
    }

    /// Location of `offset` in `source`.
    ///
    /// `source` must be the text this index was built from.
    pub fn location(&self, source: &str, offset: u32) -> SourceLocation {
        let end = floor_boundary(source, offset);
        let line = self.line_of(u32::try_from(end).unwrap_or(u32::MAX));
        let start = self.line_start(line).map_or(0, |s| s as usize).min(end);
        SourceLocation {
            line,
            column: column_of(source.get(start..end).unwrap_or("")),
        }
    }

    /// Locations of both ends of `span`.
    pub fn span_locations(&self, source: &str, span: Span) -> (SourceLocation, SourceLocation) {
        (
            self.location(source, span.start),
            self.location(source, span.end),
        )
    }
}
