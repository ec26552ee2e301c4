use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};
use std::fmt;

/// Parser combinator that transforms the error of a parser using a mapping function
///
/// The failure cursor is left untouched; only the error value changes.
pub struct MapErr<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapErr<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr { parser, mapper }
    }
}

impl<P, F> fmt::Debug for MapErr<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapErr")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<'code, P, F> Parser<'code> for MapErr<P, F>
where
    P: Parser<'code>,
    F: Fn(ParseError<P::Token>) -> ParseError<P::Token>,
{
    type Token = P::Token;
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Token>,
    ) -> ParseResult<'code, Self::Token, Self::Output> {
        self.parser
            .parse(cursor)
            .map_err(|failure| failure.map_error(&self.mapper))
    }
}

/// Extension trait to add .map_err() method support for parsers
pub trait MapErrExt<'code>: Parser<'code> + Sized {
    fn map_err<F>(self, mapper: F) -> MapErr<Self, F>
    where
        F: Fn(ParseError<Self::Token>) -> ParseError<Self::Token>,
    {
        MapErr::new(self, mapper)
    }
}

/// Implement MapErrExt for all parsers
impl<'code, P> MapErrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a MapErr parser
pub fn map_err<'code, P, F>(parser: P, mapper: F) -> MapErr<P, F>
where
    P: Parser<'code>,
    F: Fn(ParseError<P::Token>) -> ParseError<P::Token>,
{
    MapErr::new(parser, mapper)
}
