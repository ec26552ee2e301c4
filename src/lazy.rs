use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// A lazy parser that defers the construction of the actual parser until parse time.
///
/// This is useful for breaking mutual recursion between parsers. Recursion is
/// not depth limited: a left-recursive grammar recurses until the stack runs out.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Token = P::Token;
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Token>,
    ) -> ParseResult<'code, Self::Token, Self::Output> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}
