use crate::log::warn;
use crate::traits::Token;
use crate::{Cursor, InternalError, ParseConfig};

/// An immutable snapshot of a parse in progress.
///
/// Holds a borrowed view of the whole input, the current [`Cursor`], the
/// caller's auxiliary value `U` (symbol tables, indentation stacks, ...) and
/// the limits from [`ParseConfig`]. Every step produces a new `State`, so an
/// abandoned branch is undone by dropping its state.
///
/// Invariant: `cursor.offset() <= input.len()`.
#[derive(Debug, PartialEq)]
pub struct State<'i, T, U> {
    input: &'i [T],
    cursor: Cursor,
    user: U,
    depth: usize,
    config: ParseConfig,
}

impl<'i, T, U: Clone> Clone for State<'i, T, U> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            input: self.input,
            cursor: self.cursor,
            user: self.user.clone(),
            depth: self.depth,
            config: self.config,
        }
    }
}

impl<'i, T, U> State<'i, T, U> {
    /// Initial state: cursor at offset 0, line 1, column 1.
    #[inline]
    pub fn new(input: &'i [T], user: U) -> Self {
        Self::with_config(input, user, ParseConfig::DEFAULT)
    }

    #[inline]
    pub fn with_config(input: &'i [T], user: U, config: ParseConfig) -> Self {
        Self {
            input,
            cursor: Cursor::START,
            user,
            depth: 0,
            config,
        }
    }

    /// The whole input, including what was already consumed.
    #[inline]
    pub fn input(&self) -> &'i [T] {
        self.input
    }

    /// The input from the cursor onwards.
    #[inline]
    pub fn remaining(&self) -> &'i [T] {
        &self.input[self.cursor.offset()..]
    }

    #[inline]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    #[inline]
    pub fn user(&self) -> &U {
        &self.user
    }

    #[inline]
    pub fn into_user(self) -> U {
        self.user
    }

    #[inline]
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Current nesting depth of [`lazy`](crate::combinator::lazy) rules.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The token under the cursor, or `None` at end of input.
    #[inline]
    pub fn peek(&self) -> Option<&'i T> {
        self.input.get(self.cursor.offset())
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.cursor.offset() >= self.input.len()
    }

    /// Replaces the auxiliary value; input and cursor are unchanged.
    #[inline]
    #[must_use]
    pub fn with_user(self, user: U) -> Self {
        Self { user, ..self }
    }

    /// Transforms the auxiliary value in place of the old one.
    #[inline]
    #[must_use]
    pub fn map_user<F>(self, f: F) -> Self
    where
        F: FnOnce(U) -> U,
    {
        let Self {
            input,
            cursor,
            user,
            depth,
            config,
        } = self;
        Self {
            input,
            cursor,
            user: f(user),
            depth,
            config,
        }
    }

    /// Enters one level of recursion.
    pub(crate) fn enter(self) -> Result<Self, InternalError> {
        let depth = self.depth.saturating_add(1);
        let limit = self.config.max_recursion_depth;
        if depth > limit {
            warn!("recursion limit {} exceeded at {}", limit, self.cursor);
            return Err(InternalError::RecursionLimitExceeded { depth, limit });
        }
        Ok(Self { depth, ..self })
    }

    /// Leaves one level of recursion.
    #[inline]
    pub(crate) fn exit(self) -> Self {
        Self {
            depth: self.depth.saturating_sub(1),
            ..self
        }
    }
}

impl<'i, T: Token, U> State<'i, T, U> {
    /// Moves past the current token.
    ///
    /// Calling this at end of input is a grammar defect and yields
    /// [`InternalError::AdvancePastEnd`]; check [`peek`](Self::peek) first.
    pub fn advance(self) -> Result<Self, InternalError> {
        match self.peek() {
            Some(token) => {
                let cursor = self.cursor.advance(token);
                Ok(Self { cursor, ..self })
            }
            None => {
                warn!("advance called at end of input ({})", self.cursor);
                Err(InternalError::AdvancePastEnd {
                    offset: self.cursor.offset(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_new_state_starts_at_beginning() {
        let input = chars("ab");
        let state = State::new(&input, ());
        assert_eq!(state.cursor(), Cursor::START);
        assert_eq!(state.peek(), Some(&'a'));
        assert!(!state.at_end());
        assert_eq!(state.depth(), 0);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let input = chars("ab");
        let state = State::new(&input, ());
        assert_eq!(state.peek(), Some(&'a'));
        assert_eq!(state.peek(), Some(&'a'));
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_advance_to_end() {
        let input = chars("a\nb");
        let state = State::new(&input, ()).advance().unwrap();
        assert_eq!(state.peek(), Some(&'\n'));

        let state = state.advance().unwrap().advance().unwrap();
        assert!(state.at_end());
        assert_eq!(state.peek(), None);
        assert_eq!(state.cursor(), Cursor::new(3, 2, 2));
        assert!(state.remaining().is_empty());
    }

    #[test]
    fn test_advance_past_end_is_internal_error() {
        let input: Vec<char> = Vec::new();
        let state = State::new(&input, ());
        assert_eq!(
            state.advance(),
            Err(InternalError::AdvancePastEnd { offset: 0 })
        );
    }

    #[test]
    fn test_with_user_keeps_cursor() {
        let input = chars("xy");
        let state = State::new(&input, 1u32).advance().unwrap();
        let cursor = state.cursor();

        let state = state.with_user(2);
        assert_eq!(*state.user(), 2);
        assert_eq!(state.cursor(), cursor);
        assert_eq!(state.remaining(), &['y']);
    }

    #[test]
    fn test_enter_respects_limit() {
        let input = chars("x");
        let config = ParseConfig::new().with_max_recursion_depth(2);
        let state = State::with_config(&input, (), config);

        let state = state.enter().unwrap().enter().unwrap();
        assert_eq!(state.depth(), 2);
        assert_eq!(
            state.clone().enter(),
            Err(InternalError::RecursionLimitExceeded { depth: 3, limit: 2 })
        );
        assert_eq!(state.exit().depth(), 1);
    }

    #[test]
    fn test_exit_saturates() {
        let input = chars("x");
        let state = State::new(&input, ()).exit().exit();
        assert_eq!(state.depth(), 0);
    }
}
