use crate::{Outcome, PResult, Parser, State};

/// Falls back to a default value. See [`optional`].
pub struct Optional<P, V> {
    parser: P,
    default: V,
}

impl<P, V> Optional<P, V> {
    pub fn new(parser: P, default: V) -> Self {
        Optional { parser, default }
    }
}

impl<'i, T, U, P, V> Parser<'i, T, U> for Optional<P, V>
where
    U: Clone,
    V: Clone,
    P: Parser<'i, T, U, Output = V>,
{
    type Output = V;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, V> {
        match self.parser.apply(state.clone())? {
            Outcome::Failure {
                consumed: false, ..
            } => Ok(Outcome::success(self.default.clone(), state, false)),
            outcome => Ok(outcome),
        }
    }
}

/// `parser`'s value, or `default` without consuming if `parser` fails
/// without consuming. A failure after consuming still propagates.
pub fn optional<P, V>(parser: P, default: V) -> Optional<P, V> {
    Optional::new(parser, default)
}

/// Like [`Optional`] with `None` as the fallback.
pub struct Maybe<P> {
    parser: P,
}

impl<P> Maybe<P> {
    pub fn new(parser: P) -> Self {
        Maybe { parser }
    }
}

impl<'i, T, U, P> Parser<'i, T, U> for Maybe<P>
where
    U: Clone,
    P: Parser<'i, T, U>,
{
    type Output = Option<P::Output>;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, Self::Output> {
        match self.parser.apply(state.clone())? {
            Outcome::Success {
                value,
                state,
                consumed,
            } => Ok(Outcome::success(Some(value), state, consumed)),
            Outcome::Failure {
                consumed: false, ..
            } => Ok(Outcome::success(None, state, false)),
            Outcome::Failure { error, .. } => Ok(Outcome::failure(error, true)),
        }
    }
}
