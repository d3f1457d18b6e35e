#![no_main]

use calc::CalcError;
use libfuzzer_sys::fuzz_target;
use parsekit::{Error, InternalError};

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        match calc::evaluate(source) {
            // the calculator grammar never repeats a non-consuming rule, so
            // the only acceptable fatal error is the nesting limit
            Err(CalcError::Parse(Error::Internal(error))) => {
                assert!(
                    matches!(error, InternalError::RecursionLimitExceeded { .. }),
                    "unexpected internal error: {error}"
                );
            }
            Err(CalcError::Parse(Error::Parse(error))) => {
                let _ = error.to_string();
            }
            _ => {}
        }
    }
});
