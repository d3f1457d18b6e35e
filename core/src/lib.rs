pub mod combinator;
pub mod config;
mod cursor;
mod error;
mod log;
mod outcome;
pub mod primitive;
mod run;
mod state;
pub mod traits;

pub use config::ParseConfig;
pub use cursor::Cursor;
pub use error::{Error, ErrorKind, InternalError, ParseError, Unexpected};
pub use outcome::{Outcome, PResult};
pub use run::{run, run_prefix, run_prefix_with, run_with};
pub use state::State;
pub use traits::{BoxedParser, ByRef, Parser, ParserExt, Token};

/// Everything needed to write a grammar.
pub mod prelude {
    pub use crate::combinator::{
        attempt, between, chain_left1, choice, count, get_user, label, lazy, look_ahead, many,
        many_till, many1, not_followed_by, optional, position, put_user, sep_by, sep_by1,
        skip_many, skip_many1, update_user,
    };
    pub use crate::primitive::{
        any_token, eof, fail, none_of, one_of, satisfy, succeed, token, tokens, unexpected,
    };
    pub use crate::{
        Cursor, Error, Outcome, PResult, ParseConfig, ParseError, Parser, ParserExt, State,
        Token, run, run_prefix, run_with,
    };
}
