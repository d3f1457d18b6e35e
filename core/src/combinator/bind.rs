//! Sequencing.
//!
//! Every combinator here runs two parsers one after the other and reports
//! `consumed` as the OR of both steps, so once the first step has used input
//! an enclosing alternation can no longer retry a sibling.

use crate::{Outcome, PResult, Parser, State};

/// Runs `next` on the state left by a successful `first`.
#[inline]
fn sequence<'i, T, U, A, B, N>(first: Outcome<'i, T, U, A>, next: N) -> PResult<'i, T, U, B>
where
    N: FnOnce(A, State<'i, T, U>) -> PResult<'i, T, U, B>,
{
    match first {
        Outcome::Success {
            value,
            state,
            consumed,
        } => Ok(next(value, state)?.or_consumed(consumed)),
        Outcome::Failure { error, consumed } => Ok(Outcome::failure(error, consumed)),
    }
}

/// Monadic bind. See [`ParserExt::and_then`](crate::ParserExt::and_then).
pub struct AndThen<P, F> {
    parser: P,
    f: F,
}

impl<P, F> AndThen<P, F> {
    pub fn new(parser: P, f: F) -> Self {
        AndThen { parser, f }
    }
}

impl<'i, T, U, P, F, Q> Parser<'i, T, U> for AndThen<P, F>
where
    P: Parser<'i, T, U>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'i, T, U>,
{
    type Output = Q::Output;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, Q::Output> {
        sequence(self.parser.apply(state)?, |value, state| {
            (self.f)(value).apply(state)
        })
    }
}

/// Keeps the second value.
pub struct Then<P, Q> {
    first: P,
    second: Q,
}

impl<P, Q> Then<P, Q> {
    pub fn new(first: P, second: Q) -> Self {
        Then { first, second }
    }
}

impl<'i, T, U, P, Q> Parser<'i, T, U> for Then<P, Q>
where
    P: Parser<'i, T, U>,
    Q: Parser<'i, T, U>,
{
    type Output = Q::Output;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, Q::Output> {
        sequence(self.first.apply(state)?, |_, state| self.second.apply(state))
    }
}

/// Keeps the first value.
pub struct Skip<P, Q> {
    first: P,
    second: Q,
}

impl<P, Q> Skip<P, Q> {
    pub fn new(first: P, second: Q) -> Self {
        Skip { first, second }
    }
}

impl<'i, T, U, P, Q> Parser<'i, T, U> for Skip<P, Q>
where
    P: Parser<'i, T, U>,
    Q: Parser<'i, T, U>,
{
    type Output = P::Output;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, P::Output> {
        sequence(self.first.apply(state)?, |value, state| {
            Ok(self.second.apply(state)?.map(|_| value))
        })
    }
}

/// Keeps both values as a pair.
pub struct And<P, Q> {
    first: P,
    second: Q,
}

impl<P, Q> And<P, Q> {
    pub fn new(first: P, second: Q) -> Self {
        And { first, second }
    }
}

impl<'i, T, U, P, Q> Parser<'i, T, U> for And<P, Q>
where
    P: Parser<'i, T, U>,
    Q: Parser<'i, T, U>,
{
    type Output = (P::Output, Q::Output);

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, Self::Output> {
        sequence(self.first.apply(state)?, |a, state| {
            Ok(self.second.apply(state)?.map(|b| (a, b)))
        })
    }
}

/// `open`, then `parser`, then `close`, keeping `parser`'s value.
pub type Between<O, C, P> = Skip<Then<O, P>, C>;

pub fn between<O, C, P>(open: O, close: C, parser: P) -> Between<O, C, P> {
    Skip::new(Then::new(open, parser), close)
}
