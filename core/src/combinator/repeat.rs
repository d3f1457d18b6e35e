//! Repetition.
//!
//! All loops here thread an owned [`State`] through an iterative loop, so
//! repetition depth never touches the call stack. A repeated parser that
//! succeeds without consuming would never terminate; the loops detect it and
//! stop with [`InternalError::NoProgress`].

use crate::log::warn;
use crate::{InternalError, Outcome, PResult, Parser, State};

/// Applies `parser` until it fails without consuming, folding each value
/// into `acc`.
///
/// Fewer than `at_least` successes turns the terminating failure into the
/// result. A failure after consuming always propagates.
pub(crate) fn repeat<'i, T, U, P, A, F>(
    parser: &P,
    mut state: State<'i, T, U>,
    at_least: usize,
    mut acc: A,
    mut fold: F,
) -> PResult<'i, T, U, A>
where
    U: Clone,
    P: Parser<'i, T, U>,
    F: FnMut(A, P::Output) -> A,
{
    let mut count = 0usize;
    loop {
        match parser.apply(state.clone())? {
            Outcome::Success {
                value,
                state: next,
                consumed,
            } => {
                if !consumed {
                    return Err(no_progress(&state));
                }
                acc = fold(acc, value);
                count += 1;
                state = next;
            }
            Outcome::Failure {
                error,
                consumed: true,
            } => return Ok(Outcome::failure(error, true)),
            Outcome::Failure { error, .. } => {
                return Ok(if count < at_least {
                    Outcome::failure(error, count > 0)
                } else {
                    Outcome::success(acc, state, count > 0)
                });
            }
        }
    }
}

pub(crate) fn no_progress<T, U>(state: &State<'_, T, U>) -> InternalError {
    warn!("repeated parser made no progress at {}", state.cursor());
    InternalError::NoProgress {
        offset: state.offset(),
    }
}

/// Collects repetitions into a `Vec`. See [`many`] and [`many1`].
pub struct Many<P> {
    parser: P,
    at_least: usize,
}

impl<P> Many<P> {
    pub fn new(parser: P, at_least: usize) -> Self {
        Many { parser, at_least }
    }
}

impl<'i, T, U, P> Parser<'i, T, U> for Many<P>
where
    U: Clone,
    P: Parser<'i, T, U>,
{
    type Output = Vec<P::Output>;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, Self::Output> {
        repeat(&self.parser, state, self.at_least, Vec::new(), |mut values, value| {
            values.push(value);
            values
        })
    }
}

/// Zero or more repetitions of `parser`.
///
/// `parser` must consume input whenever it succeeds.
pub fn many<P>(parser: P) -> Many<P> {
    Many::new(parser, 0)
}

/// One or more repetitions of `parser`.
pub fn many1<P>(parser: P) -> Many<P> {
    Many::new(parser, 1)
}

/// Repetition that discards the values. See [`skip_many`].
pub struct SkipMany<P> {
    parser: P,
    at_least: usize,
}

impl<P> SkipMany<P> {
    pub fn new(parser: P, at_least: usize) -> Self {
        SkipMany { parser, at_least }
    }
}

impl<'i, T, U, P> Parser<'i, T, U> for SkipMany<P>
where
    U: Clone,
    P: Parser<'i, T, U>,
{
    type Output = ();

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, ()> {
        repeat(&self.parser, state, self.at_least, (), |(), _| ())
    }
}

pub fn skip_many<P>(parser: P) -> SkipMany<P> {
    SkipMany::new(parser, 0)
}

pub fn skip_many1<P>(parser: P) -> SkipMany<P> {
    SkipMany::new(parser, 1)
}

/// Exactly `n` repetitions. See [`count`].
pub struct Count<P> {
    parser: P,
    n: usize,
}

impl<P> Count<P> {
    pub fn new(parser: P, n: usize) -> Self {
        Count { parser, n }
    }
}

impl<'i, T, U, P> Parser<'i, T, U> for Count<P>
where
    P: Parser<'i, T, U>,
{
    type Output = Vec<P::Output>;

    fn apply(&self, mut state: State<'i, T, U>) -> PResult<'i, T, U, Self::Output> {
        let mut values = Vec::with_capacity(self.n.min(state.remaining().len()));
        let mut consumed = false;
        for _ in 0..self.n {
            match self.parser.apply(state)? {
                Outcome::Success {
                    value,
                    state: next,
                    consumed: step,
                } => {
                    values.push(value);
                    consumed |= step;
                    state = next;
                }
                Outcome::Failure { error, consumed: step } => {
                    return Ok(Outcome::failure(error, consumed || step));
                }
            }
        }
        Ok(Outcome::success(values, state, consumed))
    }
}

/// `parser` exactly `n` times; `count(0, p)` succeeds without consuming.
pub fn count<P>(n: usize, parser: P) -> Count<P> {
    Count::new(parser, n)
}

/// Repeats a parser until a terminator matches. See [`many_till`].
pub struct ManyTill<P, E> {
    parser: P,
    end: E,
}

impl<P, E> ManyTill<P, E> {
    pub fn new(parser: P, end: E) -> Self {
        ManyTill { parser, end }
    }
}

impl<'i, T, U, P, E> Parser<'i, T, U> for ManyTill<P, E>
where
    U: Clone,
    P: Parser<'i, T, U>,
    E: Parser<'i, T, U>,
{
    type Output = Vec<P::Output>;

    fn apply(&self, mut state: State<'i, T, U>) -> PResult<'i, T, U, Self::Output> {
        let mut values = Vec::new();
        let mut consumed = false;
        loop {
            let end_error = match self.end.apply(state.clone())? {
                Outcome::Success {
                    state: next,
                    consumed: step,
                    ..
                } => return Ok(Outcome::success(values, next, consumed || step)),
                Outcome::Failure {
                    error,
                    consumed: true,
                } => return Ok(Outcome::failure(error, true)),
                Outcome::Failure { error, .. } => error,
            };

            match self.parser.apply(state.clone())? {
                Outcome::Success {
                    value,
                    state: next,
                    consumed: step,
                } => {
                    if !step {
                        return Err(no_progress(&state));
                    }
                    values.push(value);
                    consumed = true;
                    state = next;
                }
                Outcome::Failure {
                    error,
                    consumed: true,
                } => return Ok(Outcome::failure(error, true)),
                Outcome::Failure { error, .. } => {
                    return Ok(Outcome::failure(end_error.merge(error), consumed));
                }
            }
        }
    }
}

/// Zero or more `parser` up to and including `end`; `end`'s value is
/// dropped.
pub fn many_till<P, E>(parser: P, end: E) -> ManyTill<P, E> {
    ManyTill::new(parser, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParserExt;
    use crate::primitive::{any_token, satisfy, succeed, token, tokens};
    use test_case::test_case;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn digit<'i>(state: State<'i, char, ()>) -> PResult<'i, char, (), char> {
        satisfy(|c: &char| c.is_ascii_digit()).apply(state)
    }

    #[test]
    fn test_many_digits_stops_at_letter() {
        let input = chars("123abc");
        let outcome = many(digit).apply(State::new(&input, ())).unwrap();

        let Outcome::Success {
            value,
            state,
            consumed,
        } = outcome
        else {
            panic!("expected success");
        };
        assert_eq!(value, vec!['1', '2', '3']);
        assert_eq!(state.offset(), 3);
        assert_eq!(state.peek(), Some(&'a'));
        assert!(consumed);
    }

    #[test_case(""; "empty input")]
    #[test_case("abc"; "no leading digit")]
    fn test_many_without_match_is_empty(text: &str) {
        let input = chars(text);
        let state = State::new(&input, ());
        let outcome = many(digit).apply(state.clone()).unwrap();
        assert_eq!(outcome, Outcome::success(Vec::new(), state, false));
    }

    #[test]
    fn test_many1_requires_one() {
        let input = chars("abc");
        let outcome = many1(digit).apply(State::new(&input, ())).unwrap();

        assert!(!outcome.is_success());
        assert!(!outcome.consumed());
        assert_eq!(outcome.error().map(|e| e.offset()), Some(0));
    }

    #[test]
    fn test_many_partial_element_fails() {
        let input = chars("ababac");
        let pair = token('a').then(token('b'));
        let outcome = many(pair).apply(State::new(&input, ())).unwrap();

        assert!(!outcome.is_success());
        assert!(outcome.consumed());
        assert_eq!(outcome.error().map(|e| e.offset()), Some(5));
    }

    #[test]
    fn test_many_detects_no_progress() {
        let input = chars("abc");
        let result = many(succeed('x')).apply(State::new(&input, ()));
        assert_eq!(result, Err(InternalError::NoProgress { offset: 0 }));
    }

    #[test]
    fn test_no_progress_after_some_elements() {
        let input = chars("11a");
        let parser = many(digit.maybe());
        let result = parser.apply(State::new(&input, ()));
        assert_eq!(result, Err(InternalError::NoProgress { offset: 2 }));
    }

    #[test]
    fn test_skip_many() {
        let input = chars("   x");
        let outcome = skip_many(token(' ')).then(token('x'));
        let outcome = outcome.apply(State::new(&input, ())).unwrap();
        assert_eq!(outcome.value(), Some('x'));

        let outcome = skip_many1(token(' '))
            .apply(State::new(&input[3..], ()))
            .unwrap();
        assert!(!outcome.is_success());
    }

    #[test_case("12345", Some(vec!['1', '2', '3']); "enough")]
    #[test_case("12a", None; "too few")]
    fn test_count(text: &str, expected: Option<Vec<char>>) {
        let input = chars(text);
        let outcome = count(3, digit).apply(State::new(&input, ())).unwrap();
        assert_eq!(outcome.value(), expected);
    }

    #[test]
    fn test_count_zero() {
        let input = chars("1");
        let state = State::new(&input, ());
        let outcome = count(0, digit).apply(state.clone()).unwrap();
        assert_eq!(outcome, Outcome::success(Vec::new(), state, false));
    }

    #[test]
    fn test_count_larger_than_input_fails() {
        let input = chars("ab");
        let outcome = count(usize::MAX / 2, token('a'))
            .apply(State::new(&input, ()))
            .unwrap();

        let error = outcome.error().unwrap();
        assert_eq!(error.offset(), 1);
        assert!(outcome.consumed());
    }

    #[test]
    fn test_many_till_comment() {
        let input = chars("/* hi */rest");
        let comment = tokens(chars("/*")).then(many_till(any_token(), tokens(chars("*/"))));
        let outcome = comment.apply(State::new(&input, ())).unwrap();

        let Outcome::Success { value, state, .. } = outcome else {
            panic!("expected success");
        };
        assert_eq!(value, chars(" hi "));
        assert_eq!(state.offset(), 8);
    }

    #[test]
    fn test_many_till_unterminated() {
        let input = chars("ab");
        let outcome = many_till(any_token(), token(';'))
            .apply(State::new(&input, ()))
            .unwrap();

        let error = outcome.error().unwrap();
        assert_eq!(error.offset(), 2);
        assert!(error.expected().contains("';'"));
        assert!(outcome.consumed());
    }
}
