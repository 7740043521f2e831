//! Line/column positions.
//!
//! The lexer advances a [`Position`] over every character it consumes, so
//! each token carries its own start and end coordinates. Diagnostics that
//! only hold a byte offset resolve it through [`LineOffsetTable`].
//!
//! Both agree on line breaks: `\n`, `\r\n` and a lone `\r` each end a line.

use std::fmt;

/// A point in a source unit.
///
/// `line` and `column` are 1-based; `column` counts characters, not bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Start of a source unit.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Advance over `text`, which must start at `self.offset`.
    ///
    /// A `\r\n` pair counts as a single line break. Callers never split the
    /// pair across two calls.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source units are capped at u32::MAX bytes before lexing"
    )]
    pub fn advance(&mut self, text: &str) {
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        continue;
                    }
                    self.line += 1;
                    self.column = 1;
                }
                '\n' => {
                    self.line += 1;
                    self.column = 1;
                }
                _ => self.column += 1,
            }
        }
        self.offset += text.len() as u32;
    }

    /// Copy of `self` advanced over `text`.
    #[must_use]
    pub fn advanced(mut self, text: &str) -> Position {
        self.advance(text);
        self
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Pre-computed line start offsets for O(log L) offset → position lookup.
///
/// ```
/// use bal_ir::{LineOffsetTable, Position};
///
/// let source = "ab\r\ncd\ref";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.line_count(), 3);
/// assert_eq!(
///     table.position(source, 4),
///     Position { offset: 4, line: 2, column: 1 }
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// `starts[n]` is the byte offset where line `n + 1` begins.
    starts: Vec<u32>,
}

impl LineOffsetTable {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source units are capped at u32::MAX bytes before lexing"
    )]
    pub fn build(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut starts = vec![0u32];
        let mut i = 0;
        while let Some(found) = memchr::memchr2(b'\n', b'\r', &bytes[i..]) {
            let at = i + found;
            let next = if bytes[at] == b'\r' && bytes.get(at + 1) == Some(&b'\n') {
                at + 2
            } else {
                at + 1
            };
            starts.push(next as u32);
            i = next;
        }
        LineOffsetTable { starts }
    }

    /// 1-based line containing `offset`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count is bounded by the source length"
    )]
    pub fn line_of(&self, offset: u32) -> u32 {
        let idx = match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        idx as u32 + 1
    }

    /// Resolve a byte offset to a full [`Position`].
    ///
    /// `offset` is clamped to the source length.
    pub fn position(&self, source: &str, offset: u32) -> Position {
        let offset = offset.min(u32::try_from(source.len()).unwrap_or(u32::MAX));
        let line = self.line_of(offset);
        let line_start = self.line_start(line).unwrap_or(0) as usize;
        let column_text = source.get(line_start..offset as usize).unwrap_or("");
        let column = u32::try_from(column_text.chars().count()).unwrap_or(u32::MAX - 1) + 1;
        Position {
            offset,
            line,
            column,
        }
    }

    /// Byte offset where the 1-based `line` begins.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        let idx = line.checked_sub(1)?;
        self.starts.get(idx as usize).copied()
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }
}

#[cfg(test)]
mod tests;
