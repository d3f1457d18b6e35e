use crate::{Outcome, PResult, Parser, State};

/// A rule built on demand, with recursion depth accounting.
///
/// Every application enters one level of nesting and leaves it again on
/// success. Going deeper than
/// [`ParseConfig::max_recursion_depth`](crate::ParseConfig) aborts the parse
/// with [`InternalError::RecursionLimitExceeded`](crate::InternalError)
/// instead of overflowing the stack.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    pub fn new(factory: F) -> Self {
        Lazy { factory }
    }
}

impl<'i, T, U, F, P> Parser<'i, T, U> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'i, T, U>,
{
    type Output = P::Output;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, P::Output> {
        let parser = (self.factory)();
        Ok(match parser.apply(state.enter()?)? {
            Outcome::Success {
                value,
                state,
                consumed,
            } => Outcome::success(value, state.exit(), consumed),
            failure => failure,
        })
    }
}

/// Defers building a parser until it is applied.
///
/// Use it at the recursive edge of a grammar, e.g. the parenthesised
/// sub-expression inside an expression rule.
pub fn lazy<F>(factory: F) -> Lazy<F> {
    Lazy::new(factory)
}
