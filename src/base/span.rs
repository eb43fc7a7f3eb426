//! Source spans and line/column lookup.

use text_size::{TextRange, TextSize};

/// A byte range in the source together with the position of its start.
///
/// `start` and `end` are byte offsets (`end` exclusive). `line` and `column`
/// are 1-based and describe `start`; the column counts bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: u32,
    pub end: u32,
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub fn new(start: u32, end: u32, line: u32, column: u32) -> Self {
        debug_assert!(start <= end, "span start {start} after end {end}");
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// A zero-length span at `offset`.
    pub fn empty_at(offset: u32, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Build a span from a raw range, resolving the start position.
    pub fn from_range(range: TextRange, index: &LineIndex) -> Self {
        let lc = index.line_col(range.start());
        Self::new(range.start().into(), range.end().into(), lc.line, lc.column)
    }

    pub fn range(&self) -> TextRange {
        TextRange::new(TextSize::new(self.start), TextSize::new(self.end))
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both. Position is taken from whichever starts first.
    pub fn cover(self, other: Span) -> Span {
        let (first, _) = if self.start <= other.start {
            (self, other)
        } else {
            (other, self)
        };
        Span::new(
            first.start,
            self.end.max(other.end),
            first.line,
            first.column,
        )
    }

    /// The source text this span covers, or `""` if it is out of bounds.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source
            .get(self.start as usize..self.end as usize)
            .unwrap_or("")
    }
}

/// A 1-based line and byte column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

/// Maps byte offsets to line/column positions.
///
/// Only `\n` terminates a line; a lone `\r` is ordinary text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(offset as u32 + 1));
            }
        }
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let column = u32::from(offset - self.line_starts[line]) + 1;
        LineCol {
            line: line as u32 + 1,
            column,
        }
    }

    /// Byte offset where the 1-based `line` starts.
    pub fn line_start(&self, line: u32) -> Option<TextSize> {
        let idx = line.checked_sub(1)? as usize;
        self.line_starts.get(idx).copied()
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
