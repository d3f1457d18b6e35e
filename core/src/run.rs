//! Top-level invocation.

use crate::log::{debug, warn};
use crate::{Error, InternalError, Outcome, ParseConfig, ParseError, Parser, State, Token};

/// Parses the whole of `input` with default limits.
///
/// Trailing tokens after a successful parse are an error expecting
/// `end of input` at the position where `parser` stopped.
///
/// ```
/// use parsekit_core::{combinator::many1, primitive::satisfy, run};
///
/// let input: Vec<char> = "42".chars().collect();
/// let digits = many1(satisfy(|c: &char| c.is_ascii_digit()));
/// assert_eq!(run(&digits, &input, ()).unwrap(), vec!['4', '2']);
/// ```
pub fn run<'i, T, U, P>(parser: &P, input: &'i [T], user: U) -> Result<P::Output, Error>
where
    T: Token,
    P: Parser<'i, T, U>,
{
    run_with(ParseConfig::DEFAULT, parser, input, user)
}

/// [`run`] with explicit limits.
pub fn run_with<'i, T, U, P>(
    config: ParseConfig,
    parser: &P,
    input: &'i [T],
    user: U,
) -> Result<P::Output, Error>
where
    T: Token,
    P: Parser<'i, T, U>,
{
    let (value, state) = run_prefix_with(config, parser, input, user)?;
    match state.peek() {
        None => Ok(value),
        Some(token) => {
            debug!("trailing input at {}", state.cursor());
            Err(ParseError::unexpected_token(state.cursor(), token.describe())
                .expecting("end of input")
                .into())
        }
    }
}

/// Parses a prefix of `input`, returning the value and the state where
/// `parser` stopped.
pub fn run_prefix<'i, T, U, P>(
    parser: &P,
    input: &'i [T],
    user: U,
) -> Result<(P::Output, State<'i, T, U>), Error>
where
    T: Token,
    P: Parser<'i, T, U>,
{
    run_prefix_with(ParseConfig::DEFAULT, parser, input, user)
}

/// [`run_prefix`] with explicit limits.
pub fn run_prefix_with<'i, T, U, P>(
    config: ParseConfig,
    parser: &P,
    input: &'i [T],
    user: U,
) -> Result<(P::Output, State<'i, T, U>), Error>
where
    T: Token,
    P: Parser<'i, T, U>,
{
    if input.len() > config.max_tokens {
        warn!(
            "input of {} tokens exceeds limit {}",
            input.len(),
            config.max_tokens
        );
        return Err(InternalError::TokenLimitExceeded {
            len: input.len(),
            limit: config.max_tokens,
        }
        .into());
    }

    debug!("parsing {} tokens", input.len());
    match parser.apply(State::with_config(input, user, config))? {
        Outcome::Success { value, state, .. } => {
            debug!("parse stopped at {}", state.cursor());
            Ok((value, state))
        }
        Outcome::Failure { error, .. } => {
            debug!("parse failed: {}", error);
            Err(error.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParserExt;
    use crate::combinator::many;
    use crate::primitive::{succeed, token};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_run_whole_input() {
        let input = chars("aaa");
        assert_eq!(run(&many(token('a')), &input, ()), Ok(chars("aaa")));
    }

    #[test]
    fn test_run_trailing_input() {
        let input = chars("aab");
        let error = run(&many(token('a')), &input, ()).unwrap_err();

        assert!(!error.is_fatal());
        assert_eq!(
            error.to_string(),
            "unexpected 'b', expecting end of input at line 1, column 3"
        );
    }

    #[test]
    fn test_run_failure_is_parse_error() {
        let input = chars("b");
        let error = run(&token('a'), &input, ()).unwrap_err();
        assert_eq!(error.parse_error().map(|e| e.offset()), Some(0));
    }

    #[test]
    fn test_run_internal_error() {
        let input = chars("a");
        let error = run(&many(succeed(())), &input, ()).unwrap_err();
        assert_eq!(error, Error::Internal(InternalError::NoProgress { offset: 0 }));
        assert!(error.is_fatal());
    }

    #[test]
    fn test_token_limit() {
        let input = chars("aaaa");
        let config = ParseConfig::new().with_max_tokens(3);
        let error = run_with(config, &many(token('a')), &input, ()).unwrap_err();
        assert_eq!(
            error,
            Error::Internal(InternalError::TokenLimitExceeded { len: 4, limit: 3 })
        );
    }

    #[test]
    fn test_run_prefix_returns_state() {
        let input = chars("ab");
        let (value, state) = run_prefix(&token('a').and(token('b').maybe()), &input, 5u8).unwrap();
        assert_eq!(value, ('a', Some('b')));
        assert!(state.at_end());
        assert_eq!(state.into_user(), 5);
    }
}
