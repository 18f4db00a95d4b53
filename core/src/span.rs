//! Source locations.

use std::fmt;

/// Source location for error reporting.
///
/// `start` and `end` are byte offsets into the source text; `line` and
/// `column` are 1-based and point at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// A span carrying only a line and column, for callers that have no
    /// byte offsets (hand-built trees, foreign ASTs).
    pub fn at(line: usize, column: usize) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
