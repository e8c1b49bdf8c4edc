use std::fmt;

/// A location in the source text.
///
/// `offset` is a 0-based byte offset. `line` and `column` are 1-based, and the
/// column counts bytes from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Byte offset of the first byte of the lexeme.
    pub offset: usize,
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a position from its three coordinates.
    #[must_use]
    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self { offset, line, column }
    }

    /// Returns the full text of the line this position points into, without
    /// its line terminator.
    #[must_use]
    pub fn source_line<'s>(&self, source: &'s str) -> &'s str {
        source.lines().nth(self.line.saturating_sub(1)).unwrap_or("")
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
