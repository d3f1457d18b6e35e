use crate::log::trace;
use crate::{Outcome, PResult, Parser, State};

/// Backtracking override. See [`attempt`].
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<'i, T, U, P> Parser<'i, T, U> for Attempt<P>
where
    P: Parser<'i, T, U>,
{
    type Output = P::Output;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, P::Output> {
        let start = state.cursor();
        match self.parser.apply(state)? {
            Outcome::Failure { error, .. } => {
                trace!("attempt: rewinding from {} to {}", error.position(), start);
                Ok(Outcome::failure(error.at(start), false))
            }
            success => Ok(success),
        }
    }
}

/// Runs `parser`; on failure reports the error at the starting position
/// with `consumed = false`, however far `parser` got.
///
/// This lets an enclosing [`or`](crate::ParserExt::or) try a sibling after a
/// partial match. Nesting it freely can make a grammar exponential.
pub fn attempt<P>(parser: P) -> Attempt<P> {
    Attempt::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{token, tokens};
    use crate::{Cursor, ParserExt};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_attempt_resets_consumption() {
        let input = chars("ab");
        let outcome = attempt(token('a').then(token('c')))
            .apply(State::new(&input, ()))
            .unwrap();

        assert!(!outcome.consumed());
        assert_eq!(outcome.error().map(|e| e.position()), Some(Cursor::START));
    }

    #[test]
    fn test_attempt_enables_sibling() {
        let input = chars("lex");
        let keyword = tokens(chars("let")).attempt();
        let ident = token('l').many1();

        let parser = keyword.or(ident);
        let outcome = parser.apply(State::new(&input, ())).unwrap();
        assert_eq!(outcome.value(), Some(vec!['l']));
    }

    #[test]
    fn test_without_attempt_sibling_is_skipped() {
        let input = chars("lex");
        let parser = tokens(chars("let")).or(token('l').many1());
        let outcome = parser.apply(State::new(&input, ())).unwrap();

        assert!(!outcome.is_success());
        assert!(outcome.consumed());
    }

    #[test]
    fn test_attempt_success_is_unchanged() {
        let input = chars("ab");
        let state = State::new(&input, ());
        let plain = token('a').apply(state.clone()).unwrap();
        let tried = attempt(token('a')).apply(state).unwrap();
        assert_eq!(plain, tried);
    }
}
