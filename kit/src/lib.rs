#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]
//! Parsec-style parser combinators over arbitrary token streams.
//!
//! A grammar is a [`Parser`] value built from small pieces. Applying it to a
//! [`State`] yields an [`Outcome`] that records whether input was consumed;
//! that flag alone decides whether an alternative may still be tried.
//!
//! ```
//! use parsekit::prelude::*;
//!
//! fn number<'i>(state: State<'i, char, ()>) -> PResult<'i, char, (), u32> {
//!     satisfy(|c: &char| c.is_ascii_digit())
//!         .many1()
//!         .label("number")
//!         .map(|digits: Vec<char>| digits.into_iter().fold(0, |n, d| n * 10 + d.to_digit(10).unwrap_or(0)))
//!         .apply(state)
//! }
//!
//! let input: Vec<char> = "[1,22,333]".chars().collect();
//! let list = between(token('['), token(']'), sep_by(number, token(',')));
//! assert_eq!(run(&list, &input, ()).unwrap(), vec![1, 22, 333]);
//!
//! let input: Vec<char> = "[1,]".chars().collect();
//! let error = run(&list, &input, ()).unwrap_err();
//! assert_eq!(error.to_string(), "unexpected ']', expecting number at line 1, column 4");
//! ```
pub use parsekit_core::*;
pub use parsekit_macros::*;
