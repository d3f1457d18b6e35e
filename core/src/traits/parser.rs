use crate::combinator::{
    And, AndThen, Attempt, Count, Label, LookAhead, Many, ManyTill, Map, Maybe, Optional, Or,
    SepBy, Skip, SkipMany, Then,
};
use crate::{PResult, State};

/// The parser contract: a pure mapping from [`State`] to
/// [`Outcome`](crate::Outcome).
///
/// Applying the same parser to equal states must yield equal outcomes. Any
/// configuration (a predicate, a token set) is fixed at construction, so a
/// parser can be shared freely, including across threads when its captures
/// allow.
///
/// # Associated Types
///
/// - `Output`: the value produced on success
///
/// # Implementing
///
/// Functions and closures with the signature
/// `Fn(State<'i, T, U>) -> PResult<'i, T, U, V>` are parsers already. Implement
/// the trait by hand only for reusable leaf parsers with configuration.
pub trait Parser<'i, T, U> {
    /// The value produced on success.
    type Output;

    /// Runs the parser from `state`.
    ///
    /// Returns `Ok(Outcome::Success { .. })` or `Ok(Outcome::Failure { .. })`
    /// for ordinary results and `Err` only for structural violations.
    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, Self::Output>;
}

impl<'i, T, U, V, F> Parser<'i, T, U> for F
where
    T: 'i,
    F: Fn(State<'i, T, U>) -> PResult<'i, T, U, V>,
{
    type Output = V;

    #[inline]
    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, V> {
        self(state)
    }
}

/// A type-erased parser, for grammars that store heterogeneous rules or
/// need a nameable type.
///
/// The boxed parser must be `Send + Sync`, so a boxed grammar can be shared
/// between threads like any other parser value.
pub struct BoxedParser<'a, 'i, T, U, V> {
    inner: Box<dyn Parser<'i, T, U, Output = V> + Send + Sync + 'a>,
}

impl<'a, 'i, T, U, V> BoxedParser<'a, 'i, T, U, V> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'i, T, U, Output = V> + Send + Sync + 'a,
    {
        Self {
            inner: Box::new(parser),
        }
    }
}

impl<'a, 'i, T, U, V> Parser<'i, T, U> for BoxedParser<'a, 'i, T, U, V> {
    type Output = V;

    #[inline]
    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, V> {
        self.inner.apply(state)
    }
}

/// Borrows a parser so it can be composed without giving it up.
pub struct ByRef<'p, P> {
    parser: &'p P,
}

impl<'i, 'p, T, U, P> Parser<'i, T, U> for ByRef<'p, P>
where
    P: Parser<'i, T, U>,
{
    type Output = P::Output;

    #[inline]
    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, P::Output> {
        self.parser.apply(state)
    }
}

/// Combinator methods available on every [`Parser`].
///
/// Each method is a pure constructor: nothing runs until the result is
/// applied to a state, and the [`Parser`] impl of the result checks the
/// bounds. The trait has no token or user parameters, so leaves such as
/// [`token`](crate::primitive::token) that work for any user state still
/// chain without annotations.
///
/// `map`, `skip` and `count` share names with [`Iterator`] adapters; with
/// this trait in scope, call those on iterators as `Iterator::map(iter, f)`.
pub trait ParserExt: Sized {
    /// Transforms the success value.
    fn map<F>(self, f: F) -> Map<Self, F> {
        Map::new(self, f)
    }

    /// Feeds the success value into `f` and runs the parser it returns.
    fn and_then<F>(self, f: F) -> AndThen<Self, F> {
        AndThen::new(self, f)
    }

    /// Runs `next` after `self`, keeping `next`'s value.
    fn then<Q>(self, next: Q) -> Then<Self, Q> {
        Then::new(self, next)
    }

    /// Runs `next` after `self`, keeping `self`'s value.
    fn skip<Q>(self, next: Q) -> Skip<Self, Q> {
        Skip::new(self, next)
    }

    /// Runs `next` after `self`, keeping both values.
    fn and<Q>(self, next: Q) -> And<Self, Q> {
        And::new(self, next)
    }

    /// Tries `other` if `self` fails without consuming.
    fn or<Q>(self, other: Q) -> Or<Self, Q> {
        Or::new(self, other)
    }

    /// Reports any failure as non-consuming so an enclosing `or` may retry.
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }

    /// Falls back to `default` if `self` fails without consuming.
    fn optional<V>(self, default: V) -> Optional<Self, V> {
        Optional::new(self, default)
    }

    /// Like [`optional`](Self::optional) with `None` as the default.
    fn maybe(self) -> Maybe<Self> {
        Maybe::new(self)
    }

    /// Zero or more repetitions.
    fn many(self) -> Many<Self> {
        Many::new(self, 0)
    }

    /// One or more repetitions.
    fn many1(self) -> Many<Self> {
        Many::new(self, 1)
    }

    /// Zero or more repetitions, discarding the values.
    fn skip_many(self) -> SkipMany<Self> {
        SkipMany::new(self, 0)
    }

    /// One or more repetitions, discarding the values.
    fn skip_many1(self) -> SkipMany<Self> {
        SkipMany::new(self, 1)
    }

    /// Exactly `n` repetitions.
    fn count(self, n: usize) -> Count<Self> {
        Count::new(self, n)
    }

    /// Zero or more `self` separated by `sep`.
    fn sep_by<S>(self, sep: S) -> SepBy<Self, S> {
        SepBy::new(self, sep, 0)
    }

    /// One or more `self` separated by `sep`.
    fn sep_by1<S>(self, sep: S) -> SepBy<Self, S> {
        SepBy::new(self, sep, 1)
    }

    /// Zero or more `self`, each followed by `sep`.
    fn end_by<S>(self, sep: S) -> Many<Skip<Self, S>> {
        Many::new(Skip::new(self, sep), 0)
    }

    /// Repeats `self` until `end` succeeds.
    fn many_till<E>(self, end: E) -> ManyTill<Self, E> {
        ManyTill::new(self, end)
    }

    /// Names what was expected when `self` fails without consuming.
    fn label(self, name: impl Into<String>) -> Label<Self> {
        Label::new(self, name)
    }

    /// Runs `self` without consuming on success.
    fn look_ahead(self) -> LookAhead<Self> {
        LookAhead::new(self)
    }

    /// Borrows `self` as a parser, leaving it usable afterwards.
    fn borrowed(&self) -> ByRef<'_, Self> {
        ByRef { parser: self }
    }

    fn boxed<'a, 'i, T, U>(self) -> BoxedParser<'a, 'i, T, U, <Self as Parser<'i, T, U>>::Output>
    where
        Self: Parser<'i, T, U> + Send + Sync + 'a,
    {
        BoxedParser::new(self)
    }
}

impl<P> ParserExt for P {}
