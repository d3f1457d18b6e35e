//! Alternation.
//!
//! A failed branch hands over to the next one only if it consumed nothing.
//! Branches that did consume have committed; wrap them in
//! [`attempt`](super::attempt) to opt back into backtracking.
//!
//! Errors of branches that failed without consuming are merged. A consuming
//! failure is returned on its own, since it got further than its siblings.

use crate::log::trace;
use crate::{Outcome, PResult, ParseError, Parser, State};

/// Binary choice. See [`ParserExt::or`](crate::ParserExt::or).
pub struct Or<P, Q> {
    first: P,
    second: Q,
}

impl<P, Q> Or<P, Q> {
    pub fn new(first: P, second: Q) -> Self {
        Or { first, second }
    }
}

impl<'i, T, U, P, Q> Parser<'i, T, U> for Or<P, Q>
where
    U: Clone,
    P: Parser<'i, T, U>,
    Q: Parser<'i, T, U, Output = P::Output>,
{
    type Output = P::Output;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, P::Output> {
        match self.first.apply(state.clone())? {
            Outcome::Failure {
                error,
                consumed: false,
            } => {
                trace!("or: first branch failed at {}, trying second", state.cursor());
                Ok(match self.second.apply(state)? {
                    Outcome::Failure {
                        error: other,
                        consumed: false,
                    } => Outcome::failure(error.merge(other), false),
                    outcome => outcome,
                })
            }
            outcome => Ok(outcome),
        }
    }
}

/// N-ary choice over parsers of one type, tried left to right.
pub struct Choice<P> {
    parsers: Vec<P>,
}

impl<P> Choice<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Choice { parsers }
    }
}

impl<'i, T, U, P> Parser<'i, T, U> for Choice<P>
where
    U: Clone,
    P: Parser<'i, T, U>,
{
    type Output = P::Output;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, P::Output> {
        let mut merged: Option<ParseError> = None;

        for parser in &self.parsers {
            match parser.apply(state.clone())? {
                Outcome::Failure {
                    error,
                    consumed: false,
                } => {
                    merged = Some(match merged {
                        Some(previous) => previous.merge(error),
                        None => error,
                    });
                }
                outcome => return Ok(outcome),
            }
        }

        let error =
            merged.unwrap_or_else(|| ParseError::message(state.cursor(), "empty choice"));
        Ok(Outcome::failure(error, false))
    }
}

/// Tries each parser in turn; the n-ary form of [`ParserExt::or`](crate::ParserExt::or).
///
/// The parsers must share a type, which usually means
/// [`boxed`](crate::ParserExt::boxed) rules. An empty choice always fails.
pub fn choice<I, P>(parsers: I) -> Choice<P>
where
    I: IntoIterator<Item = P>,
{
    Choice::new(parsers.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{fail, succeed, token};
    use crate::{ErrorKind, ParserExt};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_first_success_wins() {
        let input = chars("a");
        let outcome = token('a')
            .or(token('a').map(|_| 'z'))
            .apply(State::new(&input, ()))
            .unwrap();
        assert_eq!(outcome.value(), Some('a'));
    }

    #[test]
    fn test_non_consuming_failure_tries_second_on_original_state() {
        let input = chars("b");
        let state = State::new(&input, ());

        let either = fail("never").or(succeed(42));
        let alone = succeed(42);
        assert_eq!(
            either.apply(state.clone()).unwrap(),
            alone.apply(state).unwrap()
        );
    }

    #[test]
    fn test_consuming_failure_skips_second() {
        let input = chars("ac");
        let state = State::new(&input, ());

        let committed = token('a').then(token('b'));
        let either = token('a').then(token('b')).or(succeed('!'));

        let outcome = either.apply(state.clone()).unwrap();
        assert!(outcome.consumed());
        assert_eq!(outcome, committed.apply(state).unwrap());
    }

    #[test]
    fn test_errors_at_same_position_merge() {
        let input = chars("c");
        let outcome = token('a')
            .or(token('b'))
            .apply(State::new(&input, ()))
            .unwrap();

        let error = outcome.error().unwrap();
        assert_eq!(error.kind(), ErrorKind::AggregateFailure);
        assert_eq!(
            error.to_string(),
            "unexpected 'c', expecting 'a' or 'b' at line 1, column 1"
        );
    }

    #[test]
    fn test_furthest_failure_is_exposed() {
        let input = chars("abz");
        let deep = token('a').then(token('b')).then(token('c'));
        let outcome = deep
            .or(token('x'))
            .apply(State::new(&input, ()))
            .unwrap();

        let error = outcome.error().unwrap();
        assert_eq!(error.offset(), 2);
        assert!(error.expected().contains("'c'"));
        assert!(!error.expected().contains("'x'"));
    }

    #[test]
    fn test_consuming_second_branch_is_not_merged() {
        let input = chars("ab");
        let second = token('a').then(token('c'));
        let outcome = token('x')
            .or(token('a').then(token('c')))
            .apply(State::new(&input, ()))
            .unwrap();

        assert_eq!(outcome, second.apply(State::new(&input, ())).unwrap());
    }

    #[test]
    fn test_choice_over_many() {
        let input = chars("c");
        let parser = choice(vec![token('a'), token('b'), token('c')]);
        let outcome = parser.apply(State::new(&input, ())).unwrap();
        assert_eq!(outcome.value(), Some('c'));

        let input = chars("d");
        let outcome = parser.apply(State::new(&input, ())).unwrap();
        let expected: Vec<_> = outcome.error().unwrap().expected().iter().cloned().collect();
        assert_eq!(expected, vec!["'a'", "'b'", "'c'"]);
    }

    #[test]
    fn test_empty_choice_fails() {
        let input = chars("a");
        let parser = choice(Vec::<crate::BoxedParser<'_, '_, char, (), char>>::new());
        let outcome = parser.apply(State::new(&input, ())).unwrap();

        assert!(!outcome.consumed());
        assert_eq!(outcome.error().map(|e| e.kind()), Some(ErrorKind::UserError));
    }
}
