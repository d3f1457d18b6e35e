use crate::combinator::repeat::no_progress;
use crate::{Outcome, PResult, Parser, State};

/// Left-associative operator chains. See [`chain_left1`].
pub struct ChainLeft1<P, O> {
    operand: P,
    operator: O,
}

impl<P, O> ChainLeft1<P, O> {
    pub fn new(operand: P, operator: O) -> Self {
        ChainLeft1 { operand, operator }
    }
}

impl<'i, T, U, P, O> Parser<'i, T, U> for ChainLeft1<P, O>
where
    U: Clone,
    P: Parser<'i, T, U>,
    O: Parser<'i, T, U>,
    O::Output: FnOnce(P::Output, P::Output) -> P::Output,
{
    type Output = P::Output;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, P::Output> {
        let (mut acc, mut state, mut consumed) = match self.operand.apply(state)? {
            Outcome::Success {
                value,
                state,
                consumed,
            } => (value, state, consumed),
            Outcome::Failure { error, consumed } => return Ok(Outcome::failure(error, consumed)),
        };

        loop {
            let (combine, next, op_consumed) = match self.operator.apply(state.clone())? {
                Outcome::Success {
                    value,
                    state,
                    consumed,
                } => (value, state, consumed),
                Outcome::Failure {
                    consumed: false, ..
                } => break,
                Outcome::Failure { error, .. } => return Ok(Outcome::failure(error, true)),
            };

            match self.operand.apply(next)? {
                Outcome::Success {
                    value,
                    state: next,
                    consumed: step,
                } => {
                    if !(op_consumed || step) {
                        return Err(no_progress(&state));
                    }
                    acc = combine(acc, value);
                    consumed = true;
                    state = next;
                }
                Outcome::Failure { error, consumed: step } if op_consumed || step => {
                    return Ok(Outcome::failure(error, true));
                }
                Outcome::Failure { .. } => break,
            }
        }

        Ok(Outcome::success(acc, state, consumed))
    }
}

/// One or more `operand`s separated by `operator`, folded from the left.
///
/// `operator` yields the function that combines the two sides, so
/// `1 - 2 - 3` becomes `(1 - 2) - 3`. The fold is iterative, so long chains
/// cost no stack.
pub fn chain_left1<P, O>(operand: P, operator: O) -> ChainLeft1<P, O> {
    ChainLeft1::new(operand, operator)
}
