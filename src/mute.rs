use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that discards the error detail of a failed parse
///
/// On failure the error becomes [`ParseError::Muted`] while the failure cursor
/// is kept. Successes pass through unchanged. Built with [`Parser::mute`] or
/// [`ignore_error`].
#[derive(Debug, Clone, Copy)]
pub struct Mute<P> {
    parser: P,
}

impl<P> Mute<P> {
    pub fn new(parser: P) -> Self {
        Mute { parser }
    }
}

impl<'code, P> Parser<'code> for Mute<P>
where
    P: Parser<'code>,
{
    type Token = P::Token;
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Token>,
    ) -> ParseResult<'code, Self::Token, Self::Output> {
        self.parser
            .parse(cursor)
            .map_err(|failure| failure.map_error(|_| ParseError::Muted))
    }
}

/// Convenience function to create a Mute parser
pub fn ignore_error<'code, P>(parser: P) -> Mute<P>
where
    P: Parser<'code>,
{
    Mute::new(parser)
}
