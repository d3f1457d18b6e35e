//! Access to the user state and the cursor. None of these consume input.

use crate::{Cursor, Outcome, PResult, Parser, State};

/// A copy of the current user state.
pub fn get_user<'i, T, U>() -> impl Parser<'i, T, U, Output = U>
where
    T: 'i,
    U: Clone,
{
    |state: State<'i, T, U>| -> PResult<'i, T, U, U> {
        let user = state.user().clone();
        Ok(Outcome::success(user, state, false))
    }
}

/// Replaces the user state with `user`.
pub fn put_user<'i, T, U>(user: U) -> impl Parser<'i, T, U, Output = ()>
where
    T: 'i,
    U: Clone,
{
    move |state: State<'i, T, U>| -> PResult<'i, T, U, ()> {
        Ok(Outcome::success((), state.with_user(user.clone()), false))
    }
}

/// Replaces the user state with `f(user)`.
pub fn update_user<'i, T, U, F>(f: F) -> impl Parser<'i, T, U, Output = ()>
where
    T: 'i,
    F: Fn(U) -> U,
{
    move |state: State<'i, T, U>| -> PResult<'i, T, U, ()> {
        Ok(Outcome::success((), state.map_user(&f), false))
    }
}

/// The current [`Cursor`].
pub fn position<'i, T, U>() -> impl Parser<'i, T, U, Output = Cursor>
where
    T: 'i,
{
    |state: State<'i, T, U>| -> PResult<'i, T, U, Cursor> {
        let cursor = state.cursor();
        Ok(Outcome::success(cursor, state, false))
    }
}
