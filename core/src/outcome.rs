use crate::{InternalError, ParseError, State};

/// The result of applying a parser to a [`State`].
///
/// `consumed` records whether at least one token was used before success or
/// failure. Alternation and repetition decide whether a sibling may be tried
/// from this flag alone, never from the error contents.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<'i, T, U, V> {
    Success {
        value: V,
        state: State<'i, T, U>,
        consumed: bool,
    },
    Failure {
        error: ParseError,
        consumed: bool,
    },
}

/// What every parser returns: an [`Outcome`], or a fatal [`InternalError`]
/// that no combinator intercepts.
pub type PResult<'i, T, U, V> = Result<Outcome<'i, T, U, V>, InternalError>;

impl<'i, T, U, V> Outcome<'i, T, U, V> {
    #[inline]
    pub fn success(value: V, state: State<'i, T, U>, consumed: bool) -> Self {
        Outcome::Success {
            value,
            state,
            consumed,
        }
    }

    #[inline]
    pub fn failure(error: ParseError, consumed: bool) -> Self {
        Outcome::Failure { error, consumed }
    }

    #[inline]
    pub fn consumed(&self) -> bool {
        match self {
            Outcome::Success { consumed, .. } | Outcome::Failure { consumed, .. } => *consumed,
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// The success value, discarding state and flags.
    #[inline]
    pub fn value(self) -> Option<V> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            Outcome::Failure { .. } => None,
        }
    }

    #[inline]
    pub fn error(&self) -> Option<&ParseError> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { error, .. } => Some(error),
        }
    }

    /// Transforms the success value; state, flag and failures pass through.
    #[inline]
    pub fn map<W, F>(self, f: F) -> Outcome<'i, T, U, W>
    where
        F: FnOnce(V) -> W,
    {
        match self {
            Outcome::Success {
                value,
                state,
                consumed,
            } => Outcome::Success {
                value: f(value),
                state,
                consumed,
            },
            Outcome::Failure { error, consumed } => Outcome::Failure { error, consumed },
        }
    }

    /// ORs an earlier step's `consumed` flag into this outcome.
    #[inline]
    pub fn or_consumed(self, earlier: bool) -> Self {
        match self {
            Outcome::Success {
                value,
                state,
                consumed,
            } => Outcome::Success {
                value,
                state,
                consumed: consumed || earlier,
            },
            Outcome::Failure { error, consumed } => Outcome::Failure {
                error,
                consumed: consumed || earlier,
            },
        }
    }

    #[inline]
    pub fn into_result(self) -> Result<(V, State<'i, T, U>), ParseError> {
        match self {
            Outcome::Success { value, state, .. } => Ok((value, state)),
            Outcome::Failure { error, .. } => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cursor;

    #[test]
    fn test_map_preserves_state_and_flag() {
        let input = ['a', 'b'];
        let state = State::new(&input[..], ());
        let outcome = Outcome::success(1, state.clone(), true).map(|v| v + 1);

        assert_eq!(outcome, Outcome::success(2, state, true));
    }

    #[test]
    fn test_map_passes_failure() {
        let error = ParseError::unexpected_end(Cursor::START);
        let outcome: Outcome<'_, char, (), i32> = Outcome::failure(error.clone(), false);
        assert_eq!(outcome.map(|v| v * 2), Outcome::failure(error, false));
    }

    #[test]
    fn test_or_consumed() {
        let error = ParseError::unexpected_end(Cursor::START);
        let outcome: Outcome<'_, char, (), ()> = Outcome::failure(error, false);
        assert!(!outcome.consumed());
        assert!(outcome.clone().or_consumed(true).consumed());
        assert!(!outcome.or_consumed(false).consumed());
    }

    #[test]
    fn test_into_result() {
        let input = ['a'];
        let state = State::new(&input[..], ());
        let (value, rest) = Outcome::success('a', state.clone(), false)
            .into_result()
            .unwrap();
        assert_eq!(value, 'a');
        assert_eq!(rest, state);
    }
}
