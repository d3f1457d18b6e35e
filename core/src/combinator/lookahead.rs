use crate::{Outcome, PResult, ParseError, Parser, State};

/// Succeeds without consuming. See [`look_ahead`].
pub struct LookAhead<P> {
    parser: P,
}

impl<P> LookAhead<P> {
    pub fn new(parser: P) -> Self {
        LookAhead { parser }
    }
}

impl<'i, T, U, P> Parser<'i, T, U> for LookAhead<P>
where
    U: Clone,
    P: Parser<'i, T, U>,
{
    type Output = P::Output;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, P::Output> {
        match self.parser.apply(state.clone())? {
            Outcome::Success { value, .. } => Ok(Outcome::success(value, state, false)),
            failure => Ok(failure),
        }
    }
}

/// Runs `parser` and, on success, returns its value from the original state.
/// Failures propagate unchanged.
pub fn look_ahead<P>(parser: P) -> LookAhead<P> {
    LookAhead::new(parser)
}

/// Negative lookahead. See [`not_followed_by`].
pub struct NotFollowedBy<P> {
    parser: P,
}

impl<P> NotFollowedBy<P> {
    pub fn new(parser: P) -> Self {
        NotFollowedBy { parser }
    }
}

impl<'i, T, U, P> Parser<'i, T, U> for NotFollowedBy<P>
where
    T: crate::Token,
    U: Clone,
    P: Parser<'i, T, U>,
{
    type Output = ();

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, ()> {
        match self.parser.apply(state.clone())? {
            Outcome::Success { .. } => Ok(Outcome::failure(
                ParseError::unexpected_at(state.cursor(), state.peek()),
                false,
            )),
            Outcome::Failure { .. } => Ok(Outcome::success((), state, false)),
        }
    }
}

/// Succeeds with `()` without consuming exactly when `parser` fails.
///
/// Handy for keyword boundaries: `tokens("let").skip(not_followed_by(letter))`.
pub fn not_followed_by<P>(parser: P) -> NotFollowedBy<P> {
    NotFollowedBy::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{satisfy, tokens};
    use crate::{ErrorKind, ParserExt};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_look_ahead_does_not_consume() {
        let input = chars("ab");
        let state = State::new(&input, ());
        let outcome = look_ahead(tokens(chars("ab"))).apply(state.clone()).unwrap();
        assert_eq!(outcome, Outcome::success(chars("ab"), state, false));
    }

    #[test]
    fn test_look_ahead_failure_propagates() {
        let input = chars("ax");
        let state = State::new(&input, ());
        let plain = tokens(chars("ab")).apply(state.clone()).unwrap();
        let peeked = tokens(chars("ab")).look_ahead().apply(state).unwrap();
        assert_eq!(plain, peeked);
        assert!(peeked.consumed());
    }

    #[test]
    fn test_keyword_boundary() {
        let letter = || satisfy(|c: &char| c.is_ascii_alphabetic());
        let keyword = || tokens(chars("let")).skip(not_followed_by(letter())).attempt();

        let input = chars("let x");
        assert!(keyword().apply(State::new(&input, ())).unwrap().is_success());

        let input = chars("letter");
        let outcome = keyword().apply(State::new(&input, ())).unwrap();
        let error = outcome.error().unwrap();
        assert_eq!(error.kind(), ErrorKind::UnexpectedToken);
        assert_eq!(error.offset(), 0);
    }
}
