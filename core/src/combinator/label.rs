use crate::{Outcome, PResult, Parser, State};

/// Renames what a parser expects. See [`label`].
pub struct Label<P> {
    parser: P,
    name: String,
}

impl<P> Label<P> {
    pub fn new(parser: P, name: impl Into<String>) -> Self {
        Label {
            parser,
            name: name.into(),
        }
    }
}

impl<'i, T, U, P> Parser<'i, T, U> for Label<P>
where
    P: Parser<'i, T, U>,
{
    type Output = P::Output;

    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, P::Output> {
        match self.parser.apply(state)? {
            Outcome::Failure {
                error,
                consumed: false,
            } => Ok(Outcome::failure(
                error.with_expected([self.name.as_str()]),
                false,
            )),
            outcome => Ok(outcome),
        }
    }
}

/// Replaces the expected set of a non-consuming failure with `name`.
///
/// Failures after consuming keep their own, more precise, expectations.
pub fn label<P>(parser: P, name: impl Into<String>) -> Label<P> {
    Label::new(parser, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParserExt;
    use crate::primitive::{one_of, token};

    #[test]
    fn test_label_replaces_expected() {
        let input: Vec<char> = "x".chars().collect();
        let digit = one_of("0123456789".chars()).label("digit");
        let outcome = digit.apply(State::new(&input, ())).unwrap();

        assert_eq!(
            outcome.error().unwrap().to_string(),
            "unexpected 'x', expecting digit at line 1, column 1"
        );
    }

    #[test]
    fn test_label_keeps_consuming_failure() {
        let input: Vec<char> = "ax".chars().collect();
        let pair = label(token('a').then(token('b')), "pair");
        let outcome = pair.apply(State::new(&input, ())).unwrap();

        let expected: Vec<_> = outcome.error().unwrap().expected().iter().collect();
        assert_eq!(expected, vec!["'b'"]);
    }
}
