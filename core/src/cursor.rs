use core::fmt;

use crate::traits::Token;

/// A position in the token input.
///
/// `offset` counts consumed tokens from the start of the input; `line` and
/// `column` are 1-based and follow [`Token::is_newline`]. A cursor is a plain
/// value: advancing returns a new one.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    offset: usize,
    line: usize,
    column: usize,
}

impl Default for Cursor {
    #[inline]
    fn default() -> Self {
        Self::START
    }
}

impl Cursor {
    /// Offset 0, line 1, column 1.
    pub const START: Self = Self {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Creates a cursor at an explicit location.
    ///
    /// `line` and `column` are clamped to at least 1.
    #[inline]
    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line: if line == 0 { 1 } else { line },
            column: if column == 0 { 1 } else { column },
        }
    }

    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the cursor positioned just past `token`.
    #[must_use]
    pub fn advance<T: Token>(self, token: &T) -> Self {
        if token.is_newline() {
            Self {
                offset: self.offset + 1,
                line: self.line + 1,
                column: 1,
            }
        } else {
            Self {
                offset: self.offset + 1,
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_cursor_start() {
        let cursor = Cursor::default();
        assert_eq!(cursor, Cursor::START);
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance_plain_token() {
        let cursor = Cursor::START.advance(&'a').advance(&'b');
        assert_eq!(cursor, Cursor::new(2, 1, 3));
    }

    #[test]
    fn test_advance_newline_resets_column() {
        let cursor = Cursor::START.advance(&'a').advance(&'\n');
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);

        let cursor = cursor.advance(&'b');
        assert_eq!(cursor, Cursor::new(3, 2, 2));
    }

    #[test]
    fn test_advance_does_not_mutate() {
        let before = Cursor::START;
        let after = before.advance(&'x');
        assert_eq!(before, Cursor::START);
        assert!(after.offset() > before.offset());
    }

    #[test_case(0, 0, Cursor::START; "zero clamps to one")]
    #[test_case(3, 2, Cursor::new(5, 3, 2); "explicit location")]
    fn test_new_clamps(line: usize, column: usize, expected: Cursor) {
        let offset = expected.offset();
        assert_eq!(Cursor::new(offset, line, column), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cursor::new(7, 2, 3).to_string(), "line 2, column 3");
    }
}
