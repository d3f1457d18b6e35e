use crate::combinator::repeat::no_progress;
use crate::{Outcome, PResult, Parser, State};

/// Separated lists. See [`sep_by`] and [`sep_by1`].
///
/// After each separator another element is required; a separator that
/// consumed input followed by a failing element is a syntax error, not the
/// end of the list.
pub struct SepBy<P, S> {
    parser: P,
    sep: S,
    at_least: usize,
}

impl<P, S> SepBy<P, S> {
    pub fn new(parser: P, sep: S, at_least: usize) -> Self {
        SepBy {
            parser,
            sep,
            at_least,
        }
    }
}

impl<'i, T, U, P, S> Parser<'i, T, U> for SepBy<P, S>
where
    U: Clone,
    P: Parser<'i, T, U>,
    S: Parser<'i, T, U>,
{
    type Output = Vec<P::Output>;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, Self::Output> {
        let (first, mut state, mut consumed) = match self.parser.apply(state.clone())? {
            Outcome::Success {
                value,
                state,
                consumed,
            } => (value, state, consumed),
            Outcome::Failure {
                consumed: false, ..
            } if self.at_least == 0 => return Ok(Outcome::success(Vec::new(), state, false)),
            Outcome::Failure { error, consumed } => return Ok(Outcome::failure(error, consumed)),
        };

        let mut values = vec![first];
        loop {
            let (next, sep_consumed) = match self.sep.apply(state.clone())? {
                Outcome::Success {
                    state: next,
                    consumed: step,
                    ..
                } => (next, step),
                Outcome::Failure {
                    consumed: false, ..
                } => break,
                Outcome::Failure { error, .. } => return Ok(Outcome::failure(error, true)),
            };

            match self.parser.apply(next)? {
                Outcome::Success {
                    value,
                    state: next,
                    consumed: step,
                } => {
                    if !(sep_consumed || step) {
                        return Err(no_progress(&state));
                    }
                    values.push(value);
                    consumed = true;
                    state = next;
                }
                Outcome::Failure { error, consumed: step } if sep_consumed || step => {
                    return Ok(Outcome::failure(error, true));
                }
                Outcome::Failure { .. } => break,
            }
        }

        Ok(Outcome::success(values, state, consumed))
    }
}

/// Zero or more `parser` separated by `sep`, keeping the elements.
pub fn sep_by<P, S>(parser: P, sep: S) -> SepBy<P, S> {
    SepBy::new(parser, sep, 0)
}

/// One or more `parser` separated by `sep`.
pub fn sep_by1<P, S>(parser: P, sep: S) -> SepBy<P, S> {
    SepBy::new(parser, sep, 1)
}
