use crate::{PResult, Parser, State};

/// Transforms a parser's success value. See [`ParserExt::map`](crate::ParserExt::map).
pub struct Map<P, F> {
    parser: P,
    f: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, f: F) -> Self {
        Map { parser, f }
    }
}

impl<'i, T, U, P, F, W> Parser<'i, T, U> for Map<P, F>
where
    P: Parser<'i, T, U>,
    F: Fn(P::Output) -> W,
{
    type Output = W;

    #[inline]
    fn apply(&self, state: State<'i, T, U>) -> PResult<'i, T, U, W> {
        Ok(self.parser.apply(state)?.map(&self.f))
    }
}
