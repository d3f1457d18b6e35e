//! Core traits for the parsekit engine.
//!
//! # Trait Hierarchy
//!
//! ```text
//! Token (what the engine needs from an input element)
//!
//! Parser (State -> Outcome)
//!     └── ParserExt (combinator methods, blanket-implemented)
//! ```
//!
//! # Usage Patterns
//!
//! Grammar rules are usually plain functions, which implement [`Parser`]
//! through the blanket impl for `Fn(State) -> PResult`:
//!
//! ```ignore
//! use parsekit::prelude::*;
//!
//! fn digits<'i>(state: State<'i, char, ()>) -> PResult<'i, char, (), String> {
//!     satisfy(char::is_ascii_digit)
//!         .many1()
//!         .map(|ds: Vec<char>| ds.into_iter().collect())
//!         .apply(state)
//! }
//! ```

mod parser;
mod token;

pub use parser::{BoxedParser, ByRef, Parser, ParserExt};
pub use token::Token;
