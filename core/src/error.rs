//! Error types.
//!
//! Two very different things can go wrong during a parse:
//!
//! - the input does not match the grammar. That is a [`ParseError`], an
//!   ordinary value carried by [`Outcome::Failure`](crate::Outcome) that
//!   combinators inspect, merge and recover from;
//! - the grammar itself is malformed (advancing past the end, a repetition
//!   that succeeds without consuming, runaway recursion). That is an
//!   [`InternalError`], returned through the `Err` side of
//!   [`PResult`](crate::PResult) and never recovered from by any combinator.
//!
//! [`run`](crate::run) folds both into [`Error`].

use std::collections::BTreeSet;
use std::fmt;

use crate::Cursor;

/// Classification of a [`ParseError`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A token was present but rejected.
    UnexpectedToken,
    /// A token was required but the input had ended.
    UnexpectedEndOfInput,
    /// A grammar-specific failure raised with [`fail`](crate::primitive::fail).
    UserError,
    /// Two failures at the same position merged by an alternation.
    AggregateFailure,
}

/// What the parser found where it failed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Unexpected {
    /// A token, by its [`Token::describe`](crate::Token::describe) text.
    Token(String),
    EndOfInput,
}

impl fmt::Display for Unexpected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unexpected::Token(token) => f.write_str(token),
            Unexpected::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// A positional parse failure.
///
/// Rendered with `Display` as
/// `unexpected <X>, expecting <a>, <b> or <c> at line L, column C`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    position: Cursor,
    expected: BTreeSet<String>,
    unexpected: Option<Unexpected>,
    message: Option<String>,
    kind: ErrorKind,
}

impl ParseError {
    /// A token was present at `position` but rejected.
    pub fn unexpected_token(position: Cursor, token: impl Into<String>) -> Self {
        Self {
            position,
            expected: BTreeSet::new(),
            unexpected: Some(Unexpected::Token(token.into())),
            message: None,
            kind: ErrorKind::UnexpectedToken,
        }
    }

    /// The input ended at `position` where a token was required.
    pub fn unexpected_end(position: Cursor) -> Self {
        Self {
            position,
            expected: BTreeSet::new(),
            unexpected: Some(Unexpected::EndOfInput),
            message: None,
            kind: ErrorKind::UnexpectedEndOfInput,
        }
    }

    /// Failure at `position` with whatever is (or is not) found there.
    pub fn unexpected_at<T: crate::Token>(position: Cursor, found: Option<&T>) -> Self {
        match found {
            Some(token) => Self::unexpected_token(position, token.describe()),
            None => Self::unexpected_end(position),
        }
    }

    /// A grammar-specific failure.
    pub fn message(position: Cursor, message: impl Into<String>) -> Self {
        Self {
            position,
            expected: BTreeSet::new(),
            unexpected: None,
            message: Some(message.into()),
            kind: ErrorKind::UserError,
        }
    }

    /// Adds one description to the expected set.
    #[must_use]
    pub fn expecting(mut self, description: impl Into<String>) -> Self {
        self.expected.insert(description.into());
        self
    }

    /// Replaces the expected set.
    #[must_use]
    pub fn with_expected<I, S>(mut self, expected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected = expected.into_iter().map(Into::into).collect();
        self
    }

    /// Moves the error to another position, keeping its contents.
    #[must_use]
    pub fn at(mut self, position: Cursor) -> Self {
        self.position = position;
        self
    }

    /// Combines two failures.
    ///
    /// The error at the greater offset wins outright, since that branch got
    /// further before failing. At equal offsets the expected sets are united
    /// and the result is an [`ErrorKind::AggregateFailure`]; `self` supplies
    /// `unexpected` and `message` when both carry one.
    #[must_use]
    pub fn merge(self, other: ParseError) -> ParseError {
        use std::cmp::Ordering;

        match self.position.offset().cmp(&other.position.offset()) {
            Ordering::Greater => self,
            Ordering::Less => other,
            Ordering::Equal => {
                let mut expected = self.expected;
                expected.extend(other.expected);
                ParseError {
                    position: self.position,
                    expected,
                    unexpected: self.unexpected.or(other.unexpected),
                    message: self.message.or(other.message),
                    kind: ErrorKind::AggregateFailure,
                }
            }
        }
    }

    #[inline]
    pub fn position(&self) -> Cursor {
        self.position
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.position.offset()
    }

    #[inline]
    pub fn expected(&self) -> &BTreeSet<String> {
        &self.expected
    }

    #[inline]
    pub fn unexpected(&self) -> Option<&Unexpected> {
        self.unexpected.as_ref()
    }

    #[inline]
    pub fn user_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Writes `a`, `a or b`, `a, b or c`.
fn write_alternatives(f: &mut fmt::Formatter<'_>, items: &BTreeSet<String>) -> fmt::Result {
    let len = items.len();
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            f.write_str(if idx == len - 1 { " or " } else { ", " })?;
        }
        f.write_str(item)?;
    }
    Ok(())
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;

        if let Some(unexpected) = &self.unexpected {
            write!(f, "unexpected {}", unexpected)?;
            wrote = true;
        }
        if !self.expected.is_empty() {
            if wrote {
                f.write_str(", ")?;
            }
            f.write_str("expecting ")?;
            write_alternatives(f, &self.expected)?;
            wrote = true;
        }
        if let Some(message) = &self.message {
            if wrote {
                f.write_str(": ")?;
            }
            f.write_str(message)?;
            wrote = true;
        }
        if !wrote {
            f.write_str("unknown parse error")?;
        }

        write!(f, " at {}", self.position)
    }
}

impl std::error::Error for ParseError {}

/// A structural violation: the grammar, not the input, is at fault.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalError {
    /// A token was consumed at end of input without checking `peek` first.
    #[error("cannot advance past end of input at offset {offset}")]
    AdvancePastEnd { offset: usize },

    /// A repeated parser succeeded without consuming, which would loop forever.
    #[error("repeated parser succeeded without consuming input at offset {offset}")]
    NoProgress { offset: usize },

    /// Nested [`lazy`](crate::combinator::lazy) rules exceeded
    /// [`ParseConfig::max_recursion_depth`](crate::ParseConfig).
    #[error("recursion limit exceeded: depth {depth} > limit {limit}")]
    RecursionLimitExceeded { depth: usize, limit: usize },

    /// The input is longer than [`ParseConfig::max_tokens`](crate::ParseConfig).
    #[error("token limit exceeded: input of {len} tokens > limit {limit}")]
    TokenLimitExceeded { len: usize, limit: usize },
}

/// Result of a top-level [`run`](crate::run).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input does not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The grammar is malformed or a resource limit was hit.
    #[error("internal parser error: {0}")]
    Internal(#[from] InternalError),
}

impl Error {
    /// `true` for [`Error::Internal`].
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Internal(_))
    }

    #[inline]
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(error) => Some(error),
            Error::Internal(_) => None,
        }
    }
}
