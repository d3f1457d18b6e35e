//! Leaf parsers that look at tokens directly.
//!
//! Each one either consumes exactly what it matched or fails without
//! consuming, with the exception of [`tokens`], which reports a partial
//! match as consumed.

use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::{Outcome, PResult, ParseError, Parser, State, Token};

/// Consumes one token and returns a copy of it.
#[inline]
fn take<'i, T: Token, U>(token: &T, state: State<'i, T, U>) -> PResult<'i, T, U, T> {
    Ok(Outcome::success(token.clone(), state.advance()?, true))
}

#[inline]
fn reject<'i, T: Token, U, V>(state: &State<'i, T, U>) -> Outcome<'i, T, U, V> {
    Outcome::failure(ParseError::unexpected_at(state.cursor(), state.peek()), false)
}

/// A single token accepted by a predicate. See [`satisfy`].
pub struct Satisfy<T, F> {
    predicate: F,
    _token: PhantomData<fn(&T)>,
}

impl<'i, T, U, F> Parser<'i, T, U> for Satisfy<T, F>
where
    T: Token,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, T> {
        match state.peek() {
            Some(token) if (self.predicate)(token) => take(token, state),
            _ => Ok(reject(&state)),
        }
    }
}

/// The current token, if `predicate` accepts it.
///
/// On rejection (or at end of input) fails without consuming; the error
/// names the offending token.
pub fn satisfy<T, F>(predicate: F) -> Satisfy<T, F>
where
    F: Fn(&T) -> bool,
{
    Satisfy {
        predicate,
        _token: PhantomData,
    }
}

/// One specific token. See [`token`].
pub struct Literal<T> {
    expected: T,
    description: String,
}

impl<'i, T, U> Parser<'i, T, U> for Literal<T>
where
    T: Token + PartialEq,
{
    type Output = T;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, T> {
        match state.peek() {
            Some(token) if *token == self.expected => take(token, state),
            _ => Ok(Outcome::failure(
                ParseError::unexpected_at(state.cursor(), state.peek())
                    .expecting(self.description.as_str()),
                false,
            )),
        }
    }
}

/// Matches a token equal to `expected`.
pub fn token<T: Token>(expected: T) -> Literal<T> {
    let description = expected.describe();
    Literal {
        expected,
        description,
    }
}

/// A fixed token sequence. See [`tokens`].
pub struct Literals<T> {
    expected: Vec<T>,
    description: String,
}

impl<'i, T, U> Parser<'i, T, U> for Literals<T>
where
    T: Token + PartialEq,
{
    type Output = Vec<T>;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, Vec<T>> {
        let start = state.cursor();
        let mut current = state;
        for (matched, expected) in self.expected.iter().enumerate() {
            match current.peek() {
                Some(token) if token == expected => current = current.advance()?,
                found => {
                    let error = ParseError::unexpected_at(start, found)
                        .expecting(self.description.as_str());
                    return Ok(Outcome::failure(error, matched > 0));
                }
            }
        }
        let consumed = !self.expected.is_empty();
        Ok(Outcome::success(self.expected.clone(), current, consumed))
    }
}

/// Matches `expected` token by token.
///
/// Once a non-empty prefix has matched, a mismatch is a consuming failure,
/// so `tokens("let").or(tokens("lex"))` needs an
/// [`attempt`](crate::combinator::attempt) around the first branch. The error
/// is reported at the start of the sequence.
pub fn tokens<T, I>(expected: I) -> Literals<T>
where
    T: Token,
    I: IntoIterator<Item = T>,
{
    let expected: Vec<T> = expected.into_iter().collect();
    let description = expected
        .iter()
        .map(Token::describe)
        .collect::<Vec<_>>()
        .join(" ");
    Literals {
        expected,
        description,
    }
}

/// Set membership test shared by [`one_of`] and [`none_of`].
struct TokenSet<T> {
    members: HashSet<T>,
    descriptions: Vec<String>,
}

impl<T: Token + Eq + Hash> TokenSet<T> {
    fn new<I: IntoIterator<Item = T>>(members: I) -> Self {
        let members: HashSet<T> = members.into_iter().collect();
        let mut descriptions: Vec<String> = members.iter().map(Token::describe).collect();
        descriptions.sort();
        TokenSet {
            members,
            descriptions,
        }
    }
}

/// Any token in a set. See [`one_of`].
pub struct OneOf<T> {
    set: TokenSet<T>,
}

impl<'i, T, U> Parser<'i, T, U> for OneOf<T>
where
    T: Token + Eq + Hash,
{
    type Output = T;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, T> {
        match state.peek() {
            Some(token) if self.set.members.contains(token) => take(token, state),
            found => Ok(Outcome::failure(
                ParseError::unexpected_at(state.cursor(), found)
                    .with_expected(self.set.descriptions.iter().map(String::as_str)),
                false,
            )),
        }
    }
}

/// Matches any token in `members`; each member is listed as expected on
/// failure.
///
/// The token type supplies equality and hashing; membership never falls back
/// to identity.
pub fn one_of<T, I>(members: I) -> OneOf<T>
where
    T: Token + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    OneOf {
        set: TokenSet::new(members),
    }
}

/// Any token outside a set. See [`none_of`].
pub struct NoneOf<T> {
    set: TokenSet<T>,
    description: String,
}

impl<'i, T, U> Parser<'i, T, U> for NoneOf<T>
where
    T: Token + Eq + Hash,
{
    type Output = T;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, T> {
        match state.peek() {
            Some(token) if !self.set.members.contains(token) => take(token, state),
            found => Ok(Outcome::failure(
                ParseError::unexpected_at(state.cursor(), found)
                    .expecting(self.description.as_str()),
                false,
            )),
        }
    }
}

/// Matches any token not in `excluded`.
///
/// End of input is always a failure: there is no token to accept.
pub fn none_of<T, I>(excluded: I) -> NoneOf<T>
where
    T: Token + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let set = TokenSet::new(excluded);
    let description = format!("none of [{}]", set.descriptions.join(", "));
    NoneOf { set, description }
}

/// Any single token. See [`any_token`].
pub struct AnyToken<T> {
    _token: PhantomData<fn() -> T>,
}

impl<'i, T: Token, U> Parser<'i, T, U> for AnyToken<T> {
    type Output = T;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, T> {
        match state.peek() {
            Some(token) => take(token, state),
            None => Ok(Outcome::failure(
                ParseError::unexpected_end(state.cursor()).expecting("any token"),
                false,
            )),
        }
    }
}

/// Consumes one token, whatever it is; fails only at end of input.
pub fn any_token<T: Token>() -> AnyToken<T> {
    AnyToken {
        _token: PhantomData,
    }
}

/// End of input. See [`eof`].
pub struct Eof;

impl<'i, T: Token, U> Parser<'i, T, U> for Eof {
    type Output = ();

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, ()> {
        match state.peek() {
            None => Ok(Outcome::success((), state, false)),
            found => Ok(Outcome::failure(
                ParseError::unexpected_at(state.cursor(), found).expecting("end of input"),
                false,
            )),
        }
    }
}

/// Succeeds with `()` only at end of input.
pub fn eof() -> Eof {
    Eof
}

/// Always succeeds. See [`succeed`].
pub struct Succeed<V> {
    value: V,
}

impl<'i, T, U, V: Clone> Parser<'i, T, U> for Succeed<V> {
    type Output = V;

    #[inline]
    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, V> {
        Ok(Outcome::success(self.value.clone(), state, false))
    }
}

/// Returns `value` without consuming.
pub fn succeed<V: Clone>(value: V) -> Succeed<V> {
    Succeed { value }
}

/// Always fails. See [`fail`] and [`unexpected`].
pub struct Fail<V> {
    text: String,
    as_unexpected: bool,
    _value: PhantomData<fn() -> V>,
}

impl<'i, T, U, V> Parser<'i, T, U> for Fail<V> {
    type Output = V;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, V> {
        let error = if self.as_unexpected {
            ParseError::unexpected_token(state.cursor(), self.text.as_str())
        } else {
            ParseError::message(state.cursor(), self.text.as_str())
        };
        Ok(Outcome::failure(error, false))
    }
}

/// Fails without consuming with a
/// [`UserError`](crate::ErrorKind::UserError) carrying `message`.
pub fn fail<V>(message: impl Into<String>) -> Fail<V> {
    Fail {
        text: message.into(),
        as_unexpected: false,
        _value: PhantomData,
    }
}

/// Fails without consuming, reporting `description` as the unexpected item.
pub fn unexpected<V>(description: impl Into<String>) -> Fail<V> {
    Fail {
        text: description.into(),
        as_unexpected: true,
        _value: PhantomData,
    }
}
