#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use parsekit::prelude::*;
use parsekit::{InternalError, Outcome};

#[derive(Debug, Arbitrary)]
struct Input {
    bytes: Vec<u8>,
    max_depth: u8,
}

/// `list := '[' (item (',' item)*)? ']'`, `item := digit+ | list`
fn list<'i>(state: State<'i, u8, ()>) -> PResult<'i, u8, (), usize> {
    let item = satisfy(|b: &u8| b.is_ascii_digit())
        .many1()
        .map(|_| 1)
        .or(lazy(|| list).map(|n: usize| n + 1));
    between(token(b'['), token(b']'), item.sep_by(token(b',')))
        .map(|items: Vec<usize>| items.into_iter().sum())
        .apply(state)
}

fuzz_target!(|input: Input| {
    let config = ParseConfig::new().with_max_recursion_depth(usize::from(input.max_depth));
    let state = State::with_config(&input.bytes[..], (), config);

    let first = list.apply(state.clone());
    let second = list.apply(state);
    assert_eq!(first, second, "parser is not pure");

    match first {
        Ok(Outcome::Success { state, consumed, .. }) => {
            assert!(consumed);
            assert!(state.offset() <= input.bytes.len());
            assert_eq!(state.depth(), 0);
        }
        Ok(Outcome::Failure { error, .. }) => {
            assert!(error.offset() <= input.bytes.len());
        }
        Err(error) => {
            assert!(
                matches!(error, InternalError::RecursionLimitExceeded { .. }),
                "unexpected internal error: {error}"
            );
        }
    }
});
