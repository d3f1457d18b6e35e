use core::fmt;

/// Capabilities the engine needs from an input token.
///
/// The engine never inspects tokens structurally. It only asks whether a
/// token ends a line (to keep [`Cursor`](crate::Cursor) line/column accurate)
/// and how to name it in a diagnostic.
///
/// Token enums usually get this via `#[derive(Token)]` from the facade crate:
///
/// ```ignore
/// #[derive(Logos, Token, Debug, Clone, PartialEq)]
/// enum Tok {
///     #[token("+")]
///     Plus,
///     #[regex(r"\n")]
///     #[newline]
///     Newline,
///     #[regex(r"[a-z]+", |lex| lex.slice().to_string())]
///     #[describe("identifier")]
///     Ident(String),
/// }
/// ```
pub trait Token: Clone + fmt::Debug {
    /// Whether consuming this token starts a new line.
    #[inline]
    fn is_newline(&self) -> bool {
        false
    }

    /// Human-readable name used in `unexpected`/`expected` diagnostics.
    fn describe(&self) -> String {
        format!("{:?}", self)
    }
}

impl Token for char {
    #[inline]
    fn is_newline(&self) -> bool {
        *self == '\n'
    }
}

impl Token for u8 {
    #[inline]
    fn is_newline(&self) -> bool {
        *self == b'\n'
    }

    fn describe(&self) -> String {
        format!("'{}'", self.escape_ascii())
    }
}

impl Token for &str {
    #[inline]
    fn is_newline(&self) -> bool {
        *self == "\n"
    }
}

impl Token for String {
    #[inline]
    fn is_newline(&self) -> bool {
        self == "\n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case('\n', true; "newline char")]
    #[test_case('a', false; "letter")]
    #[test_case('\r', false; "carriage return is not a line break")]
    fn test_char_newline(c: char, expected: bool) {
        assert_eq!(c.is_newline(), expected);
    }

    #[test]
    fn test_char_describe_is_quoted() {
        assert_eq!('h'.describe(), "'h'");
        assert_eq!('\n'.describe(), "'\\n'");
    }

    #[test]
    fn test_byte_describe() {
        assert_eq!(b'x'.describe(), "'x'");
        assert_eq!(b'\n'.describe(), "'\\n'");
        assert!(b'\n'.is_newline());
    }

    #[test]
    fn test_str_tokens() {
        assert!("\n".is_newline());
        assert!(!"let".is_newline());
        assert_eq!("let".describe(), "\"let\"");
        assert_eq!(String::from("x").describe(), "\"x\"");
    }
}
